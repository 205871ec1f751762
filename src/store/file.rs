//! Flat-file store backend
//!
//! Persists the account map to a whitespace-delimited text file, one
//! account per line. Saves overwrite the file in full.

use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::backend::{AccountMap, StoreBackend};
use crate::store::format::{parse_record, write_record};

/// File-backed account store.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreBackend for FileStore {
    fn load(&self) -> Result<AccountMap, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // First run: no store yet
                info!("Account store {} not found, starting empty", self.path.display());
                return Ok(AccountMap::new());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let mut accounts = AccountMap::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (username, record) = parse_record(index + 1, line)?;
            accounts.insert(username, record);
        }

        debug!("Loaded {} account(s) from {}", accounts.len(), self.path.display());
        Ok(accounts)
    }

    fn save(&self, accounts: &AccountMap) -> Result<(), StoreError> {
        let mut contents = String::new();
        for (username, record) in accounts {
            contents.push_str(&write_record(username, record));
            contents.push('\n');
        }

        fs::write(&self.path, contents)?;
        debug!("Saved {} account(s) to {}", accounts.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountRecord;
    use crate::error::StoreError;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("users.txt"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("users.txt"));

        let mut accounts = AccountMap::new();
        accounts.insert(
            "alice".to_string(),
            AccountRecord {
                digest: "12345".to_string(),
                failed_attempts: 2,
                locked: false,
            },
        );
        accounts.insert(
            "bob".to_string(),
            AccountRecord {
                digest: "678".to_string(),
                failed_attempts: 3,
                locked: true,
            },
        );

        store.save(&accounts).unwrap();
        assert_eq!(store.load().unwrap(), accounts);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("users.txt"));

        let mut accounts = AccountMap::new();
        accounts.insert("alice".to_string(), AccountRecord::new("1".to_string()));
        accounts.insert("bob".to_string(), AccountRecord::new("2".to_string()));
        store.save(&accounts).unwrap();

        accounts.remove("bob");
        store.save(&accounts).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key("alice"));
    }

    #[test]
    fn test_persisted_order_is_sorted_by_username() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.txt");
        let store = FileStore::new(&path);

        let mut accounts = AccountMap::new();
        accounts.insert("zoe".to_string(), AccountRecord::new("1".to_string()));
        accounts.insert("amy".to_string(), AccountRecord::new("2".to_string()));
        store.save(&accounts).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let names: Vec<&str> = contents
            .lines()
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(names, vec!["amy", "zoe"]);
    }

    #[test]
    fn test_malformed_line_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.txt");
        fs::write(&path, "alice 12345 0 0\ngarbage line\n").unwrap();

        let store = FileStore::new(&path);
        match store.load() {
            Err(StoreError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected malformed record error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.txt");
        fs::write(&path, "alice 12345 0 0\n\nbob 678 1 0\n").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.load().unwrap().len(), 2);
    }
}
