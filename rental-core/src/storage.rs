use crate::StorageResult;

/// Durable backend holding the whole booking list as one serialized blob.
///
/// Every mutation rewrites the full value; there are no partial writes.
pub trait Storage {
    /// Returns `None` when nothing has been written yet.
    fn read(&self) -> StorageResult<Option<Vec<u8>>>;

    fn write(&mut self, bytes: &[u8]) -> StorageResult<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self) -> StorageResult<Option<Vec<u8>>> {
        (**self).read()
    }

    fn write(&mut self, bytes: &[u8]) -> StorageResult<()> {
        (**self).write(bytes)
    }
}
