//! CSV roster loading.
//!
//! Expected layout is a header row naming the `name`, `duration` and `cost`
//! columns (any order; extra columns are ignored), one presenter per row:
//!
//! ```text
//! name,duration,cost
//! p1,3,120
//! p2,1,40
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::types::{Presenter, Roster};
use crate::error::LoadError;

impl Roster {
    /// Reads and validates a roster from CSV data.
    ///
    /// Fields are trimmed before parsing, so `p1, 3, 120` is accepted.
    /// A non-integer or negative `duration`/`cost` is a load error.
    ///
    /// # Examples
    ///
    /// ```
    /// use conference_slots::roster::Roster;
    ///
    /// let data = "name,duration,cost\nada,1,10\nbob,2,15\n";
    /// let roster = Roster::from_reader(data.as_bytes()).unwrap();
    /// assert_eq!(roster.len(), 2);
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let presenters = rdr
            .deserialize::<Presenter>()
            .collect::<Result<Vec<_>, _>>()?;
        debug!(records = presenters.len(), "read presenter records");

        Self::new(presenters)
    }

    /// Opens `path` and reads a roster from it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened roster file");
        Self::from_reader(file)
    }
}
