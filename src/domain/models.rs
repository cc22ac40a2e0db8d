use serde::Serialize;

use super::errors::ValidationError;

/// One of the three inputs on the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// All fields in display and validation order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Current text content of the three inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-field validation errors. A field without an entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<ValidationError>,
    email: Option<ValidationError>,
    password: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.slot(field).as_ref()
    }

    pub fn set(&mut self, field: Field, error: ValidationError) {
        *self.slot_mut(field) = Some(error);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over the fields that carry an error, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|error| (field, error)))
    }

    fn slot(&self, field: Field) -> &Option<ValidationError> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<ValidationError> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, error) in self.iter() {
            map.serialize_entry(field.key(), &error.message())?;
        }
        map.end()
    }
}

/// Immutable copy of the field values taken when a submission passed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmittedSnapshot {
    values: FormValues,
}

impl SubmittedSnapshot {
    pub fn capture(values: &FormValues) -> Self {
        Self {
            values: values.clone(),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(field)
    }
}

/// Borrowed, read-only view of the form handed to renderers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormView<'a> {
    pub values: &'a FormValues,
    #[serde(skip_serializing_if = "no_errors")]
    pub errors: &'a FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted: Option<&'a SubmittedSnapshot>,
}

fn no_errors(errors: &&FieldErrors) -> bool {
    errors.is_empty()
}
