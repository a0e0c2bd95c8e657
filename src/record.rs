use std::fmt::{Display, Formatter};

/// One parsed unit of a data source: a CSV row or a line of text.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Record(Vec<String>);

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_fields(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item=S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
