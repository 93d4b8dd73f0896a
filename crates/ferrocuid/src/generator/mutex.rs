use crate::Result;

#[cfg(feature = "parking-lot")]
pub(crate) use parking_lot::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
#[cfg(not(feature = "parking-lot"))]
pub(crate) use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Acquires `mutex`, mapping poisoning to [`crate::Error::LockPoisoned`].
#[cfg(not(feature = "parking-lot"))]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    Ok(mutex.lock()?)
}

/// Acquires `mutex`. `parking_lot` locks do not poison.
#[cfg(feature = "parking-lot")]
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    Ok(mutex.lock())
}

#[cfg(not(feature = "parking-lot"))]
pub(crate) fn read<T: ?Sized>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    Ok(lock.read()?)
}

#[cfg(feature = "parking-lot")]
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn read<T: ?Sized>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    Ok(lock.read())
}

#[cfg(not(feature = "parking-lot"))]
pub(crate) fn write<T: ?Sized>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    Ok(lock.write()?)
}

#[cfg(feature = "parking-lot")]
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn write<T: ?Sized>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    Ok(lock.write())
}
