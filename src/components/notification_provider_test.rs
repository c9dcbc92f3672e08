use super::*;

const ALL: [Severity; 4] = [Severity::Info, Severity::Success, Severity::Warning, Severity::Error];

#[test]
fn severity_classes_match_palette() {
    assert_eq!(severity_classes(Severity::Success), "bg-green-50 text-green-800");
    assert_eq!(severity_classes(Severity::Error), "bg-red-50 text-red-800");
    assert_eq!(severity_classes(Severity::Warning), "bg-yellow-50 text-yellow-800");
    assert_eq!(severity_classes(Severity::Info), "bg-blue-50 text-blue-800");
}

#[test]
fn alert_class_keeps_base_layout() {
    for severity in ALL {
        let class = alert_class(severity);
        assert!(class.starts_with(ALERT_BASE_CLASS));
        assert!(class.ends_with(severity_classes(severity)));
    }
}

#[test]
fn icon_class_uses_lighter_shade() {
    assert_eq!(icon_class(Severity::Success), "h-5 w-5 text-green-400");
    assert_eq!(icon_class(Severity::Info), "h-5 w-5 text-blue-400");
}

#[test]
fn icon_paths_are_distinct_per_severity() {
    let paths: std::collections::HashSet<_> = ALL.iter().map(|s| icon_path(*s)).collect();
    assert_eq!(paths.len(), ALL.len());
}
