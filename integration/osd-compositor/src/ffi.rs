//! `extern "C"` ABI surface. Everything unsafe in this crate lives here:
//! raw pointer/size pairs in, `i32`/`u32` status codes out. Internally
//! every call locks the single global [`Compositor`] instance and
//! delegates to its safe methods.
//!
//! Misuse outside the documented lifecycle (`UNINIT -> READY -> DESTROYED`)
//! is a local no-op with a `warn` log line, never a panic — the caller on
//! the other side of this boundary is not Rust and cannot be trusted to
//! respect the contract.

use std::sync::Mutex;

use crate::compositor::{Compositor, FsResourceLoader};

enum Lifecycle {
    Uninit,
    Ready(Compositor),
    Destroyed,
}

static STATE: Mutex<Lifecycle> = Mutex::new(Lifecycle::Uninit);

/// Base directory resources and configuration are resolved against. A real
/// deployment would make this build-time configurable; `.` keeps the
/// default usable from a CLI invoked from the asset root.
const DEFAULT_ASSET_ROOT: &str = ".";
const CONFIG_PATH: &str = "config.json";

/// Lifecycle hook the host may call before `init`, giving a `wasm32-wasi`
/// style sandbox a chance to set up its filesystem preopens. This module
/// never touches the filesystem itself before `init` runs, so the hook is
/// a documented no-op here; it exists so a host built against this ABI can
/// call it unconditionally without special-casing native targets.
#[no_mangle]
pub extern "C" fn fs_init() -> i32 {
    0
}

#[no_mangle]
pub extern "C" fn init() -> i32 {
    let mut state = STATE.lock().unwrap_or_else(|e| e.into_inner());
    if !matches!(*state, Lifecycle::Uninit) {
        log::warn!("init called outside UNINIT state, ignoring");
        return -1;
    }

    let root = std::env::var("OSD_ASSET_ROOT").unwrap_or_else(|_| DEFAULT_ASSET_ROOT.to_string());
    let loader = FsResourceLoader::new(root);
    match Compositor::init(&loader, CONFIG_PATH) {
        Ok(compositor) => {
            *state = Lifecycle::Ready(compositor);
            0
        }
        Err(e) => {
            log::error!("init failed: {e}");
            -1
        }
    }
}

/// # Safety
/// `ptr` must point to at least `size` readable bytes, valid for the
/// duration of this call. The host owns that memory; this function never
/// retains the pointer past its return.
#[no_mangle]
pub unsafe extern "C" fn update_state(ptr: u32, size: u32) -> i32 {
    let mut state = STATE.lock().unwrap_or_else(|e| e.into_inner());
    let Lifecycle::Ready(compositor) = &mut *state else {
        log::warn!("update_state called outside READY state, ignoring");
        return -1;
    };

    let bytes = unsafe { std::slice::from_raw_parts(ptr as usize as *const u8, size as usize) };
    if compositor.update_state(bytes) {
        0
    } else {
        -1
    }
}

#[no_mangle]
pub extern "C" fn render() -> i32 {
    let mut state = STATE.lock().unwrap_or_else(|e| e.into_inner());
    let Lifecycle::Ready(compositor) = &mut *state else {
        log::warn!("render called outside READY state, ignoring");
        return 0;
    };
    i32::from(compositor.render())
}

/// Byte offset of the framebuffer within the module's linear memory. On a
/// `wasm32` target this pointer value *is* that offset; on a native target
/// it is the process address, useful only for an in-process host (the CLI)
/// that dereferences it back through [`crate::compositor::Compositor`]
/// directly rather than through this function.
#[no_mangle]
pub extern "C" fn get_framebuffer() -> u32 {
    let mut state = STATE.lock().unwrap_or_else(|e| e.into_inner());
    let Lifecycle::Ready(compositor) = &mut *state else {
        log::warn!("get_framebuffer called outside READY state, ignoring");
        return 0;
    };
    compositor.framebuffer_bytes().as_ptr() as usize as u32
}

#[no_mangle]
pub extern "C" fn destroy() -> i32 {
    let mut state = STATE.lock().unwrap_or_else(|e| e.into_inner());
    if !matches!(*state, Lifecycle::Ready(_)) {
        log::warn!("destroy called outside READY state, ignoring");
        return -1;
    }
    *state = Lifecycle::Destroyed;
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// This crate has exactly one test, so `STATE` is still `Uninit` here —
    /// every ABI entry point other than `init`/`fs_init` must be a no-op
    /// against that state, never touching `ptr` or panicking.
    #[test]
    fn calls_before_init_are_safe_no_ops() {
        assert_eq!(unsafe { update_state(0, 0) }, -1);
        assert_eq!(render(), 0);
        assert_eq!(get_framebuffer(), 0);
        assert_eq!(destroy(), -1);
        assert_eq!(fs_init(), 0);
    }
}
