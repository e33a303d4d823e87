use color_eyre::eyre::OptionExt as _;
use csv::ReaderBuilder;
use csv::Trim;

use crate::ledger::BalanceSheet;
use crate::record::Record;

mod csv_report;
mod ledger;
mod record;
mod settlement;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let expenses_file_path = std::env::args().nth(1).ok_or_eyre("no expenses CSV supplied")?;

    let mut expenses_reader = ReaderBuilder::new().trim(Trim::All).from_path(expenses_file_path)?;

    let mut balance_sheet = BalanceSheet::new();
    let mut failed_records = 0_usize;

    for record_res in expenses_reader.deserialize::<Record>() {
        let record = match record_res {
            Ok(record) => record,
            Err(error) => {
                eprintln!("failed to deserialize record, error={error:?}");
                failed_records += 1;
                continue;
            }
        };

        let apply_res = match &record {
            Record::Participant(participant) => ledger::add_participant(&mut balance_sheet, participant.name.clone()),
            Record::Expense(expense) => ledger::record_expense(&mut balance_sheet, expense),
        };
        if let Err(error) = apply_res {
            eprintln!("failed to apply record, record={record}, error={error}");
            failed_records += 1;
        }
    }

    let settlement_plan = settlement::plan(&balance_sheet)?;
    csv_report::write_to_stdout(&settlement_plan)?;

    if failed_records > 0 {
        std::process::exit(1);
    }
    Ok(())
}
