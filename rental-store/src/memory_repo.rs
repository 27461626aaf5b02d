use rental_core::{Storage, StorageResult};

/// Keeps the serialized booking list in memory. Used for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: &[u8]) -> Self {
        Self {
            contents: Some(bytes.to_vec()),
        }
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.clone()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> StorageResult<()> {
        self.contents = Some(bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_and_overwrites() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read().unwrap(), None);

        storage.write(b"[1]").unwrap();
        storage.write(b"[]").unwrap();
        assert_eq!(storage.read().unwrap(), Some(b"[]".to_vec()));
    }
}
