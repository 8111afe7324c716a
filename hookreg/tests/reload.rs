//! A host may build a fresh registry for every event; collected units are
//! still initialised only once per process.

#![cfg(feature = "macros")]

use hookreg::{Catalog, DispatchRegistry, HandlerLocation, HookArgs, redcap};
use std::sync::atomic::{AtomicUsize, Ordering};

mod common;
use common::DocRoot;

static INITS: AtomicUsize = AtomicUsize::new(0);
static CALLS: AtomicUsize = AtomicUsize::new(0);

#[hookreg::on_load(location = "hooks/projects/rights.php")]
fn rights_init() {
    INITS.fetch_add(1, Ordering::SeqCst);
}

#[hookreg::hook_handler(location = "hooks/projects/rights.php")]
fn rights_user_rights(_args: &HookArgs) {
    CALLS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn test_registry_per_event_initialises_once() {
    let root = DocRoot::new()
        .touch("hooks/projects/rights.php")
        .config("redcap_user_rights:\n  hooks/projects/rights.php: \"rights_user_rights:14\"\n");
    let location = HandlerLocation::new("hooks/projects/rights.php");

    for _ in 0..3 {
        let registry =
            DispatchRegistry::from_catalog(root.registry_config(), Catalog::collect()).unwrap();
        redcap::redcap_user_rights(&registry, 14).unwrap();
        assert!(registry.loader().is_loaded(&location));
    }

    assert_eq!(CALLS.load(Ordering::SeqCst), 3);
    assert_eq!(INITS.load(Ordering::SeqCst), 1);
}
