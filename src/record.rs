use color_eyre::eyre::bail;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
pub struct ParticipantName(String);

impl TryFrom<String> for ParticipantName {
    type Error = color_eyre::Report;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            bail!("participant name must not be blank value={value:?}");
        }
        Ok(Self(value))
    }
}

impl<'de> Deserialize<'de> for ParticipantName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(name).map_err(|error| serde::de::Error::custom(error.to_string()))
    }
}

#[derive(Debug, Clone, parse_display::Display)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum Record {
    #[display("{0}")]
    Participant(Participant),
    #[display("{0}")]
    Expense(Expense),
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CsvRow {
            r#type: String,
            name: ParticipantName,
            description: Option<String>,
            amount: Option<PositiveAmount>,
        }

        let row = CsvRow::deserialize(deserializer)?;

        let record = match row.r#type.as_str() {
            "participant" => Ok(Self::Participant(Participant { name: row.name })),
            "expense" => {
                let description = row
                    .description
                    .ok_or_else(|| serde::de::Error::missing_field("description"))?;
                let amount = row.amount.ok_or_else(|| serde::de::Error::missing_field("amount"))?;
                Ok(Self::Expense(Expense {
                    payer: row.name,
                    description,
                    amount,
                }))
            }
            other => Err(serde::de::Error::unknown_variant(other, &["participant", "expense"])),
        }?;

        Ok(record)
    }
}

#[derive(Debug, Clone, parse_display::Display)]
#[display("record=(participant name={name})")]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Participant {
    pub name: ParticipantName,
}

#[derive(Debug, Clone, parse_display::Display)]
#[display("record=(expense payer={payer} description={description} amount={amount})")]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Expense {
    pub payer: ParticipantName,
    pub description: String,
    pub amount: PositiveAmount,
}

/// This permits to avoid checks on non-positive amounts while allocating expenses.
#[derive(Debug, Copy, Clone, parse_display::Display)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct PositiveAmount(Decimal);

impl TryFrom<Decimal> for PositiveAmount {
    type Error = color_eyre::Report;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() || value.is_zero() {
            bail!("Decimal must be a positive value={value:?}");
        }
        Ok(Self(value))
    }
}

impl PositiveAmount {
    pub const fn as_inner(&self) -> Decimal {
        self.0
    }
}

impl<'de> Deserialize<'de> for PositiveAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let decimal = <Decimal as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(decimal).map_err(|error| serde::de::Error::custom(error.to_string()))
    }
}
