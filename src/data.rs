// src/data.rs
//
// Scraped data shapes.
//
// - Field:         the four labelled fields, in their fixed report order.
// - ProjectRecord: one detail page's worth of fields. Built once, never mutated.
// - ProjectList:   records in listing discovery order, at most MAX_PROJECTS.
// - DataSet:       headers + rows view used by the CSV/TSV writer.

use std::ops::Index;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Gstin,
    Pan,
    Name,
    PermanentAddress,
}

impl Field {
    /// Fixed order for extraction and reporting.
    pub const ALL: [Field; 4] = [Field::Gstin, Field::Pan, Field::Name, Field::PermanentAddress];

    /// Element id on the detail page.
    pub fn element_id(&self) -> &'static str {
        match self {
            Field::Gstin => "ContentPlaceHolder1_lblGstin",
            Field::Pan => "ContentPlaceHolder1_lblPan",
            Field::Name => "ContentPlaceHolder1_lblProjectName",
            Field::PermanentAddress => "ContentPlaceHolder1_lblAddress",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Gstin => "GSTIN",
            Field::Pan => "PAN",
            Field::Name => "Name",
            Field::PermanentAddress => "Permanent Address",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    gstin: String,
    pan: String,
    name: String,
    permanent_address: String,
}

impl ProjectRecord {
    pub fn new(gstin: String, pan: String, name: String, permanent_address: String) -> Self {
        Self { gstin, pan, name, permanent_address }
    }

    /// Build from a per-field producer, called once per field in `Field::ALL` order.
    pub fn from_fn(mut value: impl FnMut(Field) -> String) -> Self {
        let gstin = value(Field::Gstin);
        let pan = value(Field::Pan);
        let name = value(Field::Name);
        let permanent_address = value(Field::PermanentAddress);
        Self { gstin, pan, name, permanent_address }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Gstin => &self.gstin,
            Field::Pan => &self.pan,
            Field::Name => &self.name,
            Field::PermanentAddress => &self.permanent_address,
        }
    }

    /// `(label, value)` pairs in report order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f.label(), self.get(f)))
    }

    pub fn to_row(&self) -> Vec<String> {
        Field::ALL.iter().map(|f| s!(self.get(*f))).collect()
    }
}

impl Index<Field> for ProjectRecord {
    type Output = str;
    fn index(&self, field: Field) -> &str { self.get(field) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectList {
    records: Vec<ProjectRecord>,
}

impl ProjectList {
    pub fn with_capacity(n: usize) -> Self { Self { records: Vec::with_capacity(n) } }

    pub(crate) fn push(&mut self, record: ProjectRecord) { self.records.push(record); }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> { self.records.iter() }
    pub fn as_slice(&self) -> &[ProjectRecord] { &self.records }

    pub fn to_dataset(&self) -> DataSet {
        DataSet {
            headers: Some(Field::ALL.iter().map(|f| s!(f.label())).collect()),
            rows: self.records.iter().map(ProjectRecord::to_row).collect(),
        }
    }
}

impl FromIterator<ProjectRecord> for ProjectList {
    fn from_iter<I: IntoIterator<Item = ProjectRecord>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a ProjectList {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}
