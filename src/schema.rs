use chrono::NaiveDateTime;

/// Value kind of a generated column, with its kind-specific parameters.
///
/// Numeric and datetime kinds carry inclusive `[low, high]` generation
/// bounds (floats are sampled from the half-open `[low, high)` range, as
/// a uniform draw); categorical kinds carry the enumerated value set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Int { low: i64, high: i64 },
    Float { low: f64, high: f64 },
    Datetime { low: NaiveDateTime, high: NaiveDateTime },
    Categorical { values: &'static [&'static str] },
}

/// A single column descriptor: name plus value kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn int(name: &'static str, low: i64, high: i64) -> Self {
        Self { name, kind: FieldKind::Int { low, high } }
    }

    pub const fn float(name: &'static str, low: f64, high: f64) -> Self {
        Self { name, kind: FieldKind::Float { low, high } }
    }

    /// Datetime field from `%Y-%m-%d %H:%M:%S` literals.
    pub fn datetime(name: &'static str, low: &str, high: &str) -> Self {
        Self { name, kind: FieldKind::Datetime { low: parse_ts(low), high: parse_ts(high) } }
    }

    pub const fn categorical(name: &'static str, values: &'static [&'static str]) -> Self {
        Self { name, kind: FieldKind::Categorical { values } }
    }
}

/// An ordered collection of field descriptors for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).expect("valid datetime literal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_by_name() {
        let schema = Schema::new(vec![
            Field::int("a", 0, 10),
            Field::categorical("b", &["x", "y"]),
        ]);
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.field("b").map(|f| f.name), Some("b"));
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn datetime_field_parses_bounds() {
        let f = Field::datetime("ts", "2001-01-01 00:04:13", "2053-03-21 16:47:33");
        match f.kind {
            FieldKind::Datetime { low, high } => assert!(low < high),
            _ => panic!("expected datetime kind"),
        }
    }
}
