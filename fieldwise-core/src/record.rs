use std::sync::Arc;

use crate::convert::Converter;
use crate::field::{FieldError, FieldFlags};
use crate::value::{Kind, Value};

/// The schema-level definition of one record field.
#[derive(Clone, PartialEq, Debug)]
pub struct FieldDef {
    /// The field name.
    pub name: String,

    /// The declared kind of the field. Purely descriptive; no validation is
    /// performed against it.
    pub kind: Kind,

    /// Flags qualifying the field's behavior.
    pub flags: FieldFlags,

    /// Converter applied to raw values on construction and on
    /// copy-with-changes.
    pub converter: Option<Converter>,
}

impl FieldDef {
    /// Creates a field definition with empty flags and no converter.
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            flags: FieldFlags::EMPTY,
            converter: None,
        }
    }

    /// Sets the flags for the field.
    pub fn flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the converter for the field.
    pub fn converter(mut self, converter: Converter) -> Self {
        self.converter = Some(converter);
        self
    }
}

/// A record schema: a name and an ordered sequence of field definitions,
/// fixed at definition time.
#[derive(Clone, PartialEq, Debug)]
pub struct RecordType {
    name: String,
    fields: Vec<FieldDef>,
}

impl RecordType {
    /// Creates a record schema.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// The schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered field definitions.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns the positional index of the named field.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns the definition of the named field.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// An instance of a [`RecordType`]: one value per declared field, in field
/// order.
///
/// Instances are immutable; a modified copy is produced through
/// [`RecordValue::with_changes`].
#[derive(Clone, PartialEq, Debug)]
pub struct RecordValue {
    ty: Arc<RecordType>,
    values: Vec<Value>,
}

impl RecordValue {
    /// Builds a record from positional values, applying each field's
    /// converter to the corresponding value.
    pub fn new(ty: Arc<RecordType>, values: Vec<Value>) -> Result<Self, FieldError> {
        let mut out = Self::new_unconverted(ty, values)?;
        for (def, slot) in out.ty.clone().fields().iter().zip(out.values.iter_mut()) {
            if let Some(conv) = &def.converter {
                let raw = core::mem::replace(slot, Value::Null);
                *slot = conv.apply(&def.name, raw)?;
            }
        }
        Ok(out)
    }

    /// Builds a record from positional values without running converters.
    /// This is the fast path for values already in storage form.
    pub fn new_unconverted(ty: Arc<RecordType>, values: Vec<Value>) -> Result<Self, FieldError> {
        if values.len() != ty.fields().len() {
            return Err(FieldError::ArityMismatch {
                expected: ty.fields().len(),
                got: values.len(),
            });
        }
        Ok(Self { ty, values })
    }

    /// The schema of this record.
    pub fn ty(&self) -> &Arc<RecordType> {
        &self.ty
    }

    /// The field values in field order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the value of the named field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.ty.field_index(name).map(|i| &self.values[i])
    }

    /// Produces a copy of this record with the given fields replaced.
    ///
    /// Every change name must exist on the schema; unknown names are
    /// collected and reported together. Converters run on the changed
    /// values, matching what construction would have done.
    pub fn with_changes(&self, changes: &[(String, Value)]) -> Result<Self, FieldError> {
        let unknown: Vec<String> = changes
            .iter()
            .filter(|(name, _)| self.ty.field_index(name).is_none())
            .map(|(name, _)| name.clone())
            .collect();
        if !unknown.is_empty() {
            return Err(FieldError::NoSuchFields { names: unknown });
        }

        let mut values = self.values.clone();
        for (name, value) in changes {
            // Index and definition both exist; checked above.
            let Some(index) = self.ty.field_index(name) else {
                continue;
            };
            let def = &self.ty.fields()[index];
            values[index] = match &def.converter {
                Some(conv) => conv.apply(&def.name, value.clone())?,
                None => value.clone(),
            };
        }
        Ok(Self {
            ty: Arc::clone(&self.ty),
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::Converter;

    fn to_int(v: Value) -> Result<Value, String> {
        match v {
            Value::Int(i) => Ok(Value::Int(i)),
            Value::Str(s) => s.parse::<i64>().map(Value::Int).map_err(|e| e.to_string()),
            other => Err(format!("cannot convert {} to int", other.kind())),
        }
    }

    fn schema() -> Arc<RecordType> {
        Arc::new(RecordType::new(
            "Thing",
            vec![
                FieldDef::new("a", Kind::Int).converter(Converter::Optional(to_int)),
                FieldDef::new("b", Kind::Float),
            ],
        ))
    }

    #[test]
    fn schema_lookup_by_name() {
        let ty = RecordType::new(
            "Tagged",
            vec![
                FieldDef::new("id", Kind::Int),
                FieldDef::new("payload", Kind::Any),
            ],
        );
        assert_eq!(ty.field_index("payload"), Some(1));
        let def = ty.field("payload").unwrap();
        assert_eq!(def.kind, Kind::Any);
        assert!(ty.field("absent").is_none());
        assert_eq!(ty.field_index("absent"), None);
    }

    #[test]
    fn construction_converts() {
        let r = RecordValue::new(schema(), vec![Value::from("3"), Value::from(2.0)]).unwrap();
        assert_eq!(r.get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn unconverted_construction_stores_verbatim() {
        let r =
            RecordValue::new_unconverted(schema(), vec![Value::from("3"), Value::from(2.0)])
                .unwrap();
        assert_eq!(r.get("a"), Some(&Value::from("3")));
    }

    #[test]
    fn arity_is_checked() {
        let err = RecordValue::new(schema(), vec![Value::Int(1)]).unwrap_err();
        assert_eq!(err, FieldError::ArityMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn with_changes_converts_and_shares_rest() {
        let r = RecordValue::new(schema(), vec![Value::Int(1), Value::from(2.0)]).unwrap();
        let r2 = r.with_changes(&[("a".into(), Value::from("9"))]).unwrap();
        assert_eq!(r2.get("a"), Some(&Value::Int(9)));
        assert_eq!(r2.get("b"), Some(&Value::from(2.0)));
        assert_eq!(r.get("a"), Some(&Value::Int(1)));
    }

    #[test]
    fn with_changes_collects_all_unknown_names() {
        let r = RecordValue::new(schema(), vec![Value::Int(1), Value::from(2.0)]).unwrap();
        let err = r
            .with_changes(&[
                ("nope".into(), Value::Int(0)),
                ("b".into(), Value::from(3.0)),
                ("nah".into(), Value::Int(0)),
            ])
            .unwrap_err();
        assert_eq!(
            err,
            FieldError::NoSuchFields {
                names: vec!["nope".into(), "nah".into()]
            }
        );
    }
}
