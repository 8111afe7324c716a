//! Adapters for REDCap's hook functions.
//!
//! REDCap calls one global function per lifecycle event; each adapter here
//! forwards its arguments to [`DispatchRegistry::process_hook`] with the
//! REDCap project id as the tenant.
//!
//! [`DispatchRegistry::process_hook`]: crate::DispatchRegistry::process_hook

crate::host_events! {
    /// A data entry form is rendered.
    pub fn redcap_data_entry_form(
        project_id: i64,
        record: &str,
        instrument: &str,
        event_id: i64,
        group_id: Option<i64>
    );

    /// The top of a data entry form is rendered.
    pub fn redcap_data_entry_form_top(
        project_id: i64,
        record: &str,
        instrument: &str,
        event_id: i64,
        group_id: Option<i64>
    );

    /// A record is saved, from a data entry form or a survey.
    pub fn redcap_save_record(
        project_id: i64,
        record: &str,
        instrument: &str,
        event_id: i64,
        group_id: Option<i64>,
        survey_hash: Option<&str>,
        response_id: Option<i64>
    );

    /// A survey page is rendered.
    pub fn redcap_survey_page(
        project_id: i64,
        record: Option<&str>,
        instrument: &str,
        event_id: i64,
        group_id: Option<i64>,
        survey_hash: &str,
        response_id: Option<i64>
    );

    /// The top of a survey page is rendered.
    pub fn redcap_survey_page_top(
        project_id: i64,
        record: Option<&str>,
        instrument: &str,
        event_id: i64,
        group_id: Option<i64>,
        survey_hash: &str,
        response_id: Option<i64>
    );

    /// A participant completes a survey.
    pub fn redcap_survey_complete(
        project_id: i64,
        record: &str,
        instrument: &str,
        event_id: i64,
        group_id: Option<i64>,
        survey_hash: &str,
        response_id: Option<i64>
    );

    /// The "Add / Edit Records" page is rendered.
    pub fn redcap_add_edit_records_page(
        project_id: i64,
        instrument: Option<&str>,
        event_id: Option<i64>
    );

    /// Any project page is rendered.
    pub fn redcap_every_page_top(project_id: i64);

    /// The user rights page is rendered.
    pub fn redcap_user_rights(project_id: i64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ConfigView, DispatchRegistry, HookArgs, Param, RegistryConfig,
        testing::{CallLog, RecordingHandler},
    };
    use std::fs;

    fn registry(
        yaml: &str,
        log: &CallLog,
    ) -> (tempfile::TempDir, DispatchRegistry<crate::CatalogLoader>) {
        let dir = tempfile::tempdir().unwrap();
        for file in ["hooks/projects/test.php", "plugins/example/hooks.php"] {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"").unwrap();
        }
        let catalog = crate::Catalog::builder()
            .register(
                "hooks/projects/test.php",
                "test_save_record",
                RecordingHandler::new("test", log),
            )
            .register(
                "plugins/example/hooks.php",
                "example_save_record",
                RecordingHandler::new("example", log),
            )
            .register(
                "plugins/example/hooks.php",
                "example_user_rights",
                RecordingHandler::new("rights", log),
            )
            .build();
        let loader = crate::CatalogLoader::new(dir.path(), catalog);
        let view = ConfigView::from_yaml_str(yaml).unwrap();
        let registry = DispatchRegistry::with_view(RegistryConfig::default(), view, loader);
        (dir, registry)
    }

    const CONFIG: &str = r#"
redcap_save_record:
  hooks/projects/test.php: "test_save_record: 12, 14"
  plugins/example/hooks.php: "example_save_record:*"
redcap_user_rights:
  plugins/example/hooks.php: "example_user_rights:14"
"#;

    #[test]
    fn test_save_record_forwards_all_arguments() {
        let log = CallLog::new();
        let (_dir, registry) = registry(CONFIG, &log);

        let summary =
            redcap_save_record(&registry, 14, "rec-1", "demographics", 3, None, None, Some(77))
                .unwrap();
        assert_eq!(summary.invoked, 2);

        let calls = log.calls();
        assert_eq!(calls[0].label, "test");
        assert_eq!(calls[1].label, "example");
        let expected: HookArgs = vec![
            Param::Int(14),
            Param::from("rec-1"),
            Param::from("demographics"),
            Param::Int(3),
            Param::Null,
            Param::Null,
            Param::Int(77),
        ]
        .into();
        assert_eq!(calls[0].args, expected);
    }

    #[test]
    fn test_tenant_filter_uses_project_id() {
        let log = CallLog::new();
        let (_dir, registry) = registry(CONFIG, &log);

        redcap_save_record(&registry, 99, "rec-1", "demographics", 1, None, None, None).unwrap();
        assert_eq!(log.labels(), vec!["example"]);

        log.clear();
        redcap_user_rights(&registry, 12).unwrap();
        assert!(log.is_empty());
        redcap_user_rights(&registry, 14).unwrap();
        assert_eq!(log.labels(), vec!["rights"]);
    }

    #[test]
    fn test_unconfigured_events_are_noops() {
        let log = CallLog::new();
        let (_dir, registry) = registry(CONFIG, &log);

        redcap_every_page_top(&registry, 14).unwrap();
        redcap_data_entry_form(&registry, 14, "rec-1", "demographics", 1, None).unwrap();
        redcap_add_edit_records_page(&registry, 14, None, None).unwrap();
        assert!(log.is_empty());
    }
}
