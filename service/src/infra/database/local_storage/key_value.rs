//! [`KeyValue`] stores backing a [`LocalStorage`].
//!
//! [`LocalStorage`]: super::LocalStorage

use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

use tracerr::Traced;
use tracing as log;

use super::Error;

/// Synchronous string key-value store.
pub trait KeyValue {
    /// Returns the value stored under the `key`, if any.
    ///
    /// # Errors
    ///
    /// If the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Traced<Error>>;

    /// Overwrites the value stored under the `key`.
    ///
    /// # Errors
    ///
    /// If the store cannot be written.
    fn set(&self, key: &str, value: String) -> Result<(), Traced<Error>>;
}

/// In-process [`KeyValue`] store.
///
/// Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct Memory(Arc<Mutex<HashMap<String, String>>>);

impl KeyValue for Memory {
    fn get(&self, key: &str) -> Result<Option<String>, Traced<Error>> {
        Ok(self
            .0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), Traced<Error>> {
        drop(
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.to_owned(), value),
        );
        Ok(())
    }
}

/// [`KeyValue`] store persisted as a single JSON object file.
///
/// Every [`KeyValue::set()`] rewrites the whole file through a temporary
/// sibling file renamed into place.
#[derive(Clone, Debug)]
pub struct File {
    /// Path to the JSON file.
    path: PathBuf,
}

impl File {
    /// Creates a new [`File`] store at the provided `path`.
    ///
    /// The file is created lazily on the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads all the entries of this [`File`] store.
    fn read(&self) -> Result<HashMap<String, String>, Traced<Error>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(e) => return Err(tracerr::new!(Error::Io(e))),
        };
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&raw).map_err(tracerr::from_and_wrap!(=> Error))
    }

    /// Overwrites all the entries of this [`File`] store.
    fn write(
        &self,
        entries: &HashMap<String, String>,
    ) -> Result<(), Traced<Error>> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = dir {
            fs::create_dir_all(dir)
                .map_err(tracerr::from_and_wrap!(=> Error))?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        fs::write(&tmp, json).map_err(tracerr::from_and_wrap!(=> Error))?;
        fs::rename(&tmp, &self.path).map_err(tracerr::from_and_wrap!(=> Error))
    }
}

impl KeyValue for File {
    fn get(&self, key: &str) -> Result<Option<String>, Traced<Error>> {
        Ok(self.read().map_err(tracerr::wrap!())?.remove(key))
    }

    fn set(&self, key: &str, value: String) -> Result<(), Traced<Error>> {
        let mut entries = match self.read() {
            Ok(entries) => entries,
            Err(e) if matches!(e.as_ref(), Error::Json(_)) => {
                log::warn!(
                    "`{}` is corrupted, overwriting it: {e}",
                    self.path.display(),
                );
                HashMap::new()
            }
            Err(e) => return Err(tracerr::wrap!()(e)),
        };
        drop(entries.insert(key.to_owned(), value));
        self.write(&entries).map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use std::{env, fs, path::PathBuf};

    use uuid::Uuid;

    use super::{Error, File, KeyValue as _, Memory};

    fn tmp_path() -> PathBuf {
        env::temp_dir()
            .join(format!("ejeep-{}", Uuid::new_v4()))
            .join("storage.json")
    }

    #[test]
    fn memory_shares_entries_between_clones() {
        let store = Memory::default();
        let clone = store.clone();

        store.set("key", "value".into()).unwrap();

        assert_eq!(clone.get("key").unwrap().as_deref(), Some("value"));
        assert_eq!(clone.get("other").unwrap(), None);
    }

    #[test]
    fn file_persists_entries() {
        let path = tmp_path();
        let store = File::new(&path);

        assert_eq!(store.get("key").unwrap(), None);

        store.set("key", "value".into()).unwrap();
        store.set("other", "[1, 2]".into()).unwrap();

        let reopened = File::new(&path);
        assert_eq!(reopened.get("key").unwrap().as_deref(), Some("value"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("[1, 2]"));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn file_overwrites_garbage_on_write() {
        let path = tmp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        let store = File::new(&path);

        assert!(store.get("key").is_err());

        store.set("key", "value".into()).unwrap();

        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn file_keeps_unreadable_file() {
        let path = tmp_path();
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("entry"), "kept").unwrap();
        let store = File::new(&path);

        let err = store.set("key", "value".into()).unwrap_err();

        assert!(matches!(err.as_ref(), Error::Io(_)), "{err}");
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        assert!(!PathBuf::from(tmp).exists());
        assert_eq!(fs::read_to_string(path.join("entry")).unwrap(), "kept");

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
