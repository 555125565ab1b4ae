use crate::serde::{ByteCursor, ReadError, read_string};
use log::debug;
use std::fmt;

/// One of the descriptive fields every song in the cache has
///
/// Metadata values aren't stored inline in the song cache. Instead, every category has a
/// table of unique strings, and songs refer to entries in those tables by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Title,
    Artist,
    Album,
    Genre,
    Year,
    Charter,
    Playlist,
}

impl Category {
    /// The number of metadata categories
    pub const COUNT: usize = 7;

    /// All categories, in the order the song cache stores them
    pub const ALL: [Category; Self::COUNT] = [
        Category::Title,
        Category::Artist,
        Category::Album,
        Category::Genre,
        Category::Year,
        Category::Charter,
        Category::Playlist,
    ];

    /// The human-readable name of the category
    pub const fn name(self) -> &'static str {
        match self {
            Category::Title => "Title",
            Category::Artist => "Artist",
            Category::Album => "Album",
            Category::Genre => "Genre",
            Category::Year => "Year",
            Category::Charter => "Charter",
            Category::Playlist => "Playlist",
        }
    }

    /// The position of the category within [`Category::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The string tables at the start of the song cache, one per [`Category`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTables {
    tables: [Vec<String>; Category::COUNT],
}

impl LookupTables {
    /// The length of the marker byte that precedes every table
    const MARKER_LEN: usize = 1;

    /// Construct lookup tables from their entries, indexed in [`Category::ALL`] order
    pub fn new(tables: [Vec<String>; Category::COUNT]) -> Self {
        Self { tables }
    }

    /// Deserialize all tables, starting at the cursor's position
    ///
    /// Every table consists of a marker byte (whose value isn't checked), a 32-bit entry
    /// count and then that many length-prefixed strings.
    pub(crate) fn read(cursor: &mut ByteCursor) -> Result<Self, ReadError> {
        let mut tables = Self::default();

        for (category, table) in Category::ALL.into_iter().zip(&mut tables.tables) {
            cursor.skip(Self::MARKER_LEN)?;

            let count = cursor.read_u32()?;
            debug!(
                "{category} table at offset {} holds {count} entries",
                cursor.position()
            );

            for _ in 0..count {
                table.push(read_string(cursor)?);
            }
        }

        Ok(tables)
    }

    /// All entries for a specific category
    pub fn table(&self, category: Category) -> &[String] {
        &self.tables[category.index()]
    }

    /// Look up the entry at an index in a category's table
    ///
    /// Returns [`None`] if the index lies outside of the table.
    pub fn resolve(&self, category: Category, index: u32) -> Option<&str> {
        let index = usize::try_from(index).ok()?;
        self.table(category).get(index).map(String::as_str)
    }
}
