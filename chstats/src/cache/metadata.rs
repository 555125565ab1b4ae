use super::Category;
use std::time::Duration;

/// The descriptive fields of a single song in the cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: String,
    pub charter: String,
    pub playlist: String,

    /// The length of the song in milliseconds
    pub song_length: u32,
}

impl SongMetadata {
    /// Construct metadata from its fields, ordered as in [`Category::ALL`]
    pub fn from_fields(fields: [String; Category::COUNT], song_length: u32) -> Self {
        let [title, artist, album, genre, year, charter, playlist] = fields;

        Self {
            title,
            artist,
            album,
            genre,
            year,
            charter,
            playlist,
            song_length,
        }
    }

    /// Access a field by its category
    pub fn field(&self, category: Category) -> &str {
        match category {
            Category::Title => &self.title,
            Category::Artist => &self.artist,
            Category::Album => &self.album,
            Category::Genre => &self.genre,
            Category::Year => &self.year,
            Category::Charter => &self.charter,
            Category::Playlist => &self.playlist,
        }
    }

    /// The length of the song
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.song_length.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_by_category() {
        let fields = Category::ALL.map(|category| category.name().to_lowercase());
        let metadata = SongMetadata::from_fields(fields, 1500);

        for category in Category::ALL {
            assert_eq!(metadata.field(category), category.name().to_lowercase());
        }

        assert_eq!(metadata.artist, "artist");
        assert_eq!(metadata.duration(), Duration::from_millis(1500));
    }
}
