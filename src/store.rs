// src/store.rs
// Output records and the append-only store the pagination loop fills.

/// Optional metadata columns, in export order after `page` and `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    LastUpdate,
    DetailedWarnings,
    Fandom,
    Title,
    TextLink,
    ArchivedBy,
    Authors,
    GiftedTo,
    Characters,
    Relationships,
    AdditionalTags,
    Summary,
    Language,
    Words,
    Chapters,
    Comments,
    Kudos,
    Bookmarks,
    Hits,
    RequiredTags,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Field::LastUpdate,
        Field::DetailedWarnings,
        Field::Fandom,
        Field::Title,
        Field::TextLink,
        Field::ArchivedBy,
        Field::Authors,
        Field::GiftedTo,
        Field::Characters,
        Field::Relationships,
        Field::AdditionalTags,
        Field::Summary,
        Field::Language,
        Field::Words,
        Field::Chapters,
        Field::Comments,
        Field::Kudos,
        Field::Bookmarks,
        Field::Hits,
        Field::RequiredTags,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Field::LastUpdate => "last_update",
            Field::DetailedWarnings => "detailed_warnings",
            Field::Fandom => "fandom",
            Field::Title => "title",
            Field::TextLink => "text_link",
            Field::ArchivedBy => "archived_by",
            Field::Authors => "authors",
            Field::GiftedTo => "gifted_to",
            Field::Characters => "characters",
            Field::Relationships => "relationships",
            Field::AdditionalTags => "additional_tags",
            Field::Summary => "summary",
            Field::Language => "language",
            Field::Words => "words",
            Field::Chapters => "chapters",
            Field::Comments => "comments",
            Field::Kudos => "kudos",
            Field::Bookmarks => "bookmarks",
            Field::Hits => "hits",
            Field::RequiredTags => "required_tags",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One search hit. `page` and `id` are always there; every other column is
/// `None` when its element was missing from the result item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    pub page: u32,
    pub id: String,
    fields: [Option<String>; 20],
}

impl MetadataRecord {
    pub const COLUMNS: [&'static str; 22] = [
        "page",
        "id",
        "last_update",
        "detailed_warnings",
        "fandom",
        "title",
        "text_link",
        "archived_by",
        "authors",
        "gifted_to",
        "characters",
        "relationships",
        "additional_tags",
        "summary",
        "language",
        "words",
        "chapters",
        "comments",
        "kudos",
        "bookmarks",
        "hits",
        "required_tags",
    ];

    pub fn new(page: u32, id: impl Into<String>) -> Self {
        Self { page, id: id.into(), fields: Default::default() }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields[field.index()].as_deref()
    }

    /// Overwrites; a later rule application for the same item wins.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        self.fields[field.index()] = value;
    }

    /// Export row; absent fields become empty cells.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(Self::COLUMNS.len());
        row.push(self.page.to_string());
        row.push(self.id.clone());
        row.extend(self.fields.iter().map(|f| f.clone().unwrap_or_default()));
        row
    }

    pub fn headers() -> Vec<String> {
        Self::COLUMNS.iter().map(|c| s!(*c)).collect()
    }
}

/// Headers + rows, ready for `csv`/`file`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// Append-only, insertion-ordered. No lookup and no de-duplication: the
/// same work id showing up on two pages yields two records.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<MetadataRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MetadataRecord) {
        self.records.push(record);
    }

    pub fn extend<I: IntoIterator<Item = MetadataRecord>>(&mut self, records: I) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    pub fn into_dataset(self) -> DataSet {
        DataSet {
            headers: Some(MetadataRecord::headers()),
            rows: self.records.iter().map(MetadataRecord::to_row).collect(),
        }
    }
}
