//! Handlers registered with `#[hook_handler]` and `#[on_load]`, dispatched
//! through the REDCap adapters.

#![cfg(feature = "macros")]

use hookreg::{
    BoxError, Catalog, DispatchRegistry, ErrorKind, HandlerLocation, HookArgs, redcap,
};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

mod common;
use common::DocRoot;

static SAVED: Mutex<Vec<String>> = Mutex::new(Vec::new());
static RIGHTS: AtomicUsize = AtomicUsize::new(0);
static CONNECTS: AtomicUsize = AtomicUsize::new(0);

#[hookreg::hook_handler(location = "hooks/projects/test.php")]
fn test_save_record(args: &HookArgs) -> Result<(), BoxError> {
    let record = args.get(1).and_then(|p| p.as_str()).ok_or("missing record")?;
    SAVED.lock().unwrap().push(format!("test:{record}"));
    Ok(())
}

#[hookreg::hook_handler(location = "plugins/example/hooks.php", name = "example_save_record")]
fn example_save(args: &HookArgs) {
    SAVED.lock().unwrap().push(format!("example:{}", args[0]));
}

#[hookreg::hook_handler(location = "plugins/example/hooks.php")]
fn example_user_rights(_args: &HookArgs) {
    RIGHTS.fetch_add(1, Ordering::SeqCst);
}

#[hookreg::hook_handler(location = "plugins/broken/hooks.php")]
fn broken_every_page_top(_args: &HookArgs) -> Result<(), BoxError> {
    Err("broken plugin".into())
}

#[hookreg::on_load(location = "plugins/example/hooks.php")]
fn connect_example() {
    CONNECTS.fetch_add(1, Ordering::SeqCst);
}

const CONFIG: &str = r#"
redcap_save_record:
  hooks/projects/test.php: "test_save_record: 12, 14"
  plugins/example/hooks.php: "example_save_record:*"
redcap_user_rights:
  ./plugins/example/hooks.php: "example_user_rights:14"
redcap_every_page_top:
  plugins/broken/hooks.php: "broken_every_page_top:*"
"#;

#[test]
fn test_attribute_registered_handlers() {
    let root = DocRoot::new()
        .touch("hooks/projects/test.php")
        .touch("plugins/example/hooks.php")
        .touch("plugins/broken/hooks.php")
        .config(CONFIG);
    let registry = DispatchRegistry::from_catalog(root.registry_config(), Catalog::collect()).unwrap();

    let example = HandlerLocation::new("plugins/example/hooks.php");
    assert!(!registry.loader().is_loaded(&example));

    // Project 99 only reaches the wildcard binding.
    let summary =
        redcap::redcap_save_record(&registry, 99, "rec-1", "demographics", 1, None, None, None)
            .unwrap();
    assert_eq!(summary.invoked, 1);
    assert_eq!(summary.skipped, 1);
    assert!(!registry.loader().is_loaded(&HandlerLocation::new("hooks/projects/test.php")));

    redcap::redcap_save_record(&registry, 14, "rec-2", "demographics", 1, None, None, None)
        .unwrap();
    assert_eq!(
        *SAVED.lock().unwrap(),
        vec!["example:99", "test:rec-2", "example:14"]
    );

    redcap::redcap_user_rights(&registry, 12).unwrap();
    redcap::redcap_user_rights(&registry, 14).unwrap();
    assert_eq!(RIGHTS.load(Ordering::SeqCst), 1);

    // The unit backs two events but is initialised once.
    assert!(registry.loader().is_loaded(&example));
    assert_eq!(CONNECTS.load(Ordering::SeqCst), 1);

    let err = redcap::redcap_every_page_top(&registry, 14).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HandlerFailed);
    assert_eq!(err.event(), "redcap_every_page_top");
}
