use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// One timesheet line: one day's intervals against one issue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Row {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Ticket")]
    pub ticket: String,
    /// `---`-separated list of `"H:MM AM/PM - H:MM AM/PM"` ranges.
    #[serde(rename = "Times")]
    pub times: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// Tri-state in the file (true/false/blank), kept optional here and
    /// normalized to `Some(false)` when the table is loaded.
    #[serde(
        rename = "Logged",
        default,
        deserialize_with = "de_logged",
        serialize_with = "ser_logged"
    )]
    pub logged: Option<bool>,
}

// The sheet may have been written by other tools that spell booleans "True"
// and "False", so accept any casing; blank means not yet logged.
fn de_logged<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(s) if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(other) => Err(de::Error::custom(format!(
            "expected a boolean in the Logged column, got {other:?}"
        ))),
    }
}

fn ser_logged<S>(logged: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_bool(logged.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_one(csv_text: &str) -> Row {
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        reader.deserialize().next().unwrap().unwrap()
    }

    #[test]
    fn blank_logged_cell_is_none() {
        let row = read_one(
            "Date,Ticket,Times,Description,Logged\n\
             07/04/24,AB-12,9:00 AM - 10:30 AM,Fireworks,\n",
        );
        assert_eq!(row.logged, None);
    }

    #[test]
    fn pandas_style_capitalized_booleans_parse() {
        let row = read_one(
            "Date,Ticket,Times,Description,Logged\n\
             07/04/24,AB-12,9:00 AM - 10:30 AM,Fireworks,True\n",
        );
        assert_eq!(row.logged, Some(true));
    }

    #[test]
    fn garbage_logged_cell_is_an_error() {
        let mut reader = csv::Reader::from_reader(
            "Date,Ticket,Times,Description,Logged\n\
             07/04/24,AB-12,9:00 AM - 10:30 AM,Fireworks,maybe\n"
                .as_bytes(),
        );
        let result: Result<Row, _> = reader.deserialize().next().unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn logged_serializes_as_literal_boolean() {
        let row = Row {
            date: "07/04/24".to_string(),
            ticket: "AB-12".to_string(),
            times: "9:00 AM - 10:30 AM".to_string(),
            description: "Fireworks".to_string(),
            logged: Some(false),
        };
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&row).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(out.ends_with(",false\n"));
    }
}
