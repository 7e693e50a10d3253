use super::EnvError;
use std::env;

/// One name/value pair. Each entry owns its successor, so the chain is
/// finite and acyclic by construction and is released as a unit.
#[derive(Debug)]
struct EnvEntry {
    name: Box<str>,
    value: Box<str>,
    next: Option<Box<EnvEntry>>,
}

/// Ordered collection of environment variables for one shell instance.
///
/// The store starts uninitialized and is brought up once at startup from
/// the inherited process environment. Names are unique; entries keep their
/// insertion order. Mutation happens only through `set`, `unset` and
/// `teardown`, all of which take the store by exclusive reference, so the
/// chain can never be observed mid-relink.
#[derive(Debug, Default)]
pub struct EnvStore {
    head: Option<Box<EnvEntry>>,
    initialized: bool,
}

impl EnvStore {
    /// Creates an uninitialized store. `set` fails until `init_from` runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the store initialized and loads the given name/value pairs.
    pub fn init_from<I>(&mut self, vars: I) -> Result<(), EnvError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.initialized = true;
        for (name, value) in vars {
            self.set(&name, &value, true)?;
        }
        Ok(())
    }

    /// Creates a store populated from the host process environment.
    pub fn from_process_env() -> Result<Self, EnvError> {
        let mut store = Self::new();
        store.init_from(env::vars())?;
        Ok(store)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the value of the first entry whose name matches
    /// byte-for-byte. An empty or uninitialized store is simply "not
    /// found". The borrow is valid only until the next mutating call.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let mut current = self.head.as_deref();
        while let Some(entry) = current {
            if entry.name.as_ref() == name {
                return Some(&entry.value);
            }
            current = entry.next.as_deref();
        }
        None
    }

    /// Changes or adds a variable.
    ///
    /// If `name` already exists its value is replaced when `overwrite` is
    /// true and left untouched otherwise; both are successes, matching
    /// POSIX `setenv`. A new name is appended after the current tail,
    /// which also covers the empty and single-entry cases.
    pub fn set(&mut self, name: &str, value: &str, overwrite: bool) -> Result<(), EnvError> {
        if !self.initialized {
            return Err(EnvError::StoreUninitialized);
        }
        if name.is_empty() {
            return Err(EnvError::InvalidValue("Empty variable name"));
        }

        let mut cursor = &mut self.head;
        while let Some(entry) = cursor {
            if entry.name.as_ref() == name {
                if overwrite {
                    entry.value = Box::from(value);
                }
                return Ok(());
            }
            cursor = &mut entry.next;
        }

        *cursor = Some(Box::new(EnvEntry {
            name: Box::from(name),
            value: Box::from(value),
            next: None,
        }));
        Ok(())
    }

    /// Deletes `name` from the store. Succeeds whether or not the name
    /// exists, and on an empty or uninitialized store. Removing the head
    /// entry repoints `head`; removing an interior entry rewires the
    /// owning link.
    pub fn unset(&mut self, name: &str) {
        let mut cursor = &mut self.head;
        while cursor.as_ref().map_or(false, |e| e.name.as_ref() != name) {
            if let Some(entry) = cursor {
                cursor = &mut entry.next;
            }
        }
        if let Some(removed) = cursor.take() {
            *cursor = removed.next;
        }
    }

    /// Releases every entry and returns the store to the uninitialized
    /// state. Dropping is iterative so a long chain cannot blow the stack.
    pub fn teardown(&mut self) {
        let mut current = self.head.take();
        while let Some(mut entry) = current {
            current = entry.next.take();
        }
        self.initialized = false;
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Visits entries as `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: self.head.as_deref(),
        }
    }
}

impl Drop for EnvStore {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub struct Iter<'a> {
    current: Option<&'a EnvEntry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current?;
        self.current = entry.next.as_deref();
        Some((&entry.name, &entry.value))
    }
}
