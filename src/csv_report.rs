use csv::Writer;
use serde::Serialize;
use thiserror::Error;

use crate::record::ParticipantName;
use crate::settlement::Transfer;

#[derive(Debug, Error)]
pub enum CsvReportError {
    #[error("csv serialization error for transfer={transfer}, source_error={source:?}")]
    Csv {
        transfer: Transfer,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Write the supplied settlement plan to stdout as CSV, one `from,to,amount`
/// row per transfer, preserving plan order. Amounts are rendered with exactly
/// two decimal places for currency display. An empty plan writes nothing.
pub fn write_to_stdout(transfers: &[Transfer]) -> Result<(), CsvReportError> {
    let mut writer = Writer::from_writer(std::io::stdout());

    for transfer in transfers {
        if let Err(source) = writer.serialize(TransferReport::from(transfer)) {
            return Err(CsvReportError::Csv {
                transfer: transfer.clone(),
                source,
            });
        }
    }

    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct TransferReport {
    from: ParticipantName,
    to: ParticipantName,
    amount: String,
}

impl From<&Transfer> for TransferReport {
    fn from(transfer: &Transfer) -> Self {
        Self {
            from: transfer.from.clone(),
            to: transfer.to.clone(),
            amount: format!("{:.2}", transfer.amount),
        }
    }
}
