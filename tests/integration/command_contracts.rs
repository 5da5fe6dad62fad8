use std::collections::BTreeMap;

use jar_launch::launch::{LaunchRequest, Variant, DEFAULT_ENTRY_POINT, MANAGED_FRAMEWORK_PREFIX};

use crate::common::{launcher, position, strings, JAR};

fn request_with(
    operation: Option<&str>,
    runtime_args: &[&str],
    app_args: &[&str],
) -> LaunchRequest {
    LaunchRequest::builder(JAR)
        .operation(operation)
        .runtime_args(runtime_args.iter().copied())
        .app_args(app_args.iter().copied())
        .build()
}

#[test]
fn managed_bundle_contains_control_flags() {
    let command = launcher().build_managed_bundle_command(&LaunchRequest::new(JAR));

    for flag in [
        "-jar",
        JAR,
        "--spring.main.web-application-type=none",
        "--spring.profiles.include=flamingock-cli",
        "--flamingock.cli.mode=true",
        "--spring.main.banner-mode=off",
    ] {
        assert!(command.contains(&flag.to_string()), "missing {flag}: {command:?}");
    }
    assert_eq!(command.len(), 7);
    assert!(!command.iter().any(|arg| arg.starts_with("--flamingock.operation=")));
    assert!(!command.iter().any(|arg| arg.starts_with("--logging.level.root=")));
}

#[test]
fn empty_operation_is_omitted() {
    let command = launcher().build_managed_bundle_command(&request_with(Some(""), &[], &[]));

    assert!(!command.iter().any(|arg| arg.starts_with("--flamingock.operation=")));
    assert_eq!(command.len(), 7);
}

#[test]
fn log_level_is_uppercased_or_omitted() {
    let launcher = launcher();
    let cases = [
        (Some("debug"), true),
        (Some("INFO"), true),
        (Some(""), false),
        (None, false),
    ];
    for (input, expected) in cases {
        let request = LaunchRequest::builder(JAR).log_level(input).build();
        let command = launcher.build_managed_bundle_command(&request);
        let flag = command
            .iter()
            .find(|arg| arg.starts_with("--logging.level.root="));

        match (expected, input) {
            (true, Some(level)) => assert_eq!(
                flag.map(String::as_str),
                Some(format!("--logging.level.root={}", level.to_uppercase()).as_str())
            ),
            _ => assert!(flag.is_none(), "unexpected log flag for {input:?}"),
        }
    }
}

#[test]
fn output_file_flag_is_emitted() {
    let request = LaunchRequest::builder(JAR)
        .output_file(Some("/tmp/output.json"))
        .build();

    for variant in [Variant::ManagedRuntimeBundle, Variant::FlatExecutableBundle] {
        let command = launcher().build_command(&request, variant);
        assert!(command.contains(&"--flamingock.output-file=/tmp/output.json".to_string()));
    }
}

#[test]
fn runtime_args_precede_mode_selection() {
    let runtime = ["-Xmx512m", "-Xms256m"];

    let managed =
        launcher().build_managed_bundle_command(&request_with(Some("EXECUTE"), &runtime, &[]));
    let jar_index = position(&managed, "-jar");
    assert_eq!(&managed[1..3], &runtime);
    assert!(position(&managed, "-Xms256m") < jar_index);

    let flat =
        launcher().build_flat_bundle_command(&request_with(Some("EXECUTE"), &["-Xmx1g"], &[]));
    assert!(position(&flat, "-Xmx1g") < position(&flat, "-cp"));
}

#[test]
fn app_args_are_last_in_caller_order() {
    let app = [
        "--spring.profiles.active=prod",
        "--spring.datasource.url=jdbc:mysql://host:3306/db?useSSL=true&serverTimezone=UTC",
    ];

    for variant in [Variant::ManagedRuntimeBundle, Variant::FlatExecutableBundle] {
        let request = request_with(Some("EXECUTE"), &["-Xmx512m"], &app);
        let command = launcher().build_command(&request, variant);
        let tail = &command[command.len() - 2..];
        assert_eq!(tail, &app, "{variant:?}: {command:?}");
    }
}

#[test]
fn app_args_follow_operation_args() {
    let request = LaunchRequest::builder(JAR)
        .operation(Some("EXECUTE"))
        .operation_arg("flamingock.change-id", "my-change")
        .app_args(["--my.custom.prop=value"])
        .build();

    let command = launcher().build_managed_bundle_command(&request);
    let operation_arg = position(&command, "--flamingock.change-id=my-change");
    let app_arg = position(&command, "--my.custom.prop=value");

    assert!(operation_arg < app_arg);
    assert_eq!(app_arg, command.len() - 1);
}

#[test]
fn operation_args_do_not_depend_on_insertion_order() {
    let forward = LaunchRequest::builder(JAR)
        .operation_args([("b.key", "2"), ("a.key", "1"), ("c.key", "3")])
        .build();
    let mut reversed_map = BTreeMap::new();
    for (key, value) in [("c.key", "3"), ("a.key", "1"), ("b.key", "2")] {
        reversed_map.insert(key.to_string(), value.to_string());
    }
    let reversed = LaunchRequest {
        operation_args: reversed_map,
        ..LaunchRequest::new(JAR)
    };

    let launcher = launcher();
    let first = launcher.build_managed_bundle_command(&forward);
    assert_eq!(first, launcher.build_managed_bundle_command(&reversed));
    assert_eq!(&first[7..], &["--a.key=1", "--b.key=2", "--c.key=3"]);
}

#[test]
fn empty_collections_match_omitted_ones() {
    let without = LaunchRequest::builder(JAR).operation(Some("EXECUTE")).build();
    let with_empty = LaunchRequest::builder(JAR)
        .operation(Some("EXECUTE"))
        .operation_args(Vec::<(String, String)>::new())
        .runtime_args(Vec::<String>::new())
        .app_args(Vec::<String>::new())
        .build();

    let launcher = launcher();
    for variant in [Variant::ManagedRuntimeBundle, Variant::FlatExecutableBundle] {
        assert_eq!(
            launcher.build_command(&without, variant),
            launcher.build_command(&with_empty, variant)
        );
    }
}

#[test]
fn flat_bundle_never_emits_framework_flags() {
    let request = LaunchRequest::builder(JAR)
        .operation(Some("LIST"))
        .output_file(Some("/tmp/output.json"))
        .log_level(Some("debug"))
        .build();

    let command = launcher().build_flat_bundle_command(&request);

    assert!(
        !command
            .iter()
            .any(|arg| arg.starts_with(MANAGED_FRAMEWORK_PREFIX)),
        "no framework flags expected: {command:?}"
    );
    assert!(command.contains(&DEFAULT_ENTRY_POINT.to_string()));
    assert!(!command.contains(&"-jar".to_string()));
    assert!(command.contains(&"--flamingock.cli.mode=true".to_string()));
    assert!(command.contains(&"--flamingock.operation=LIST".to_string()));
    assert!(command.contains(&"--flamingock.log.level=DEBUG".to_string()));
}

#[test]
fn flat_bundle_operation_adds_one_token() {
    let command = launcher().build_flat_bundle_command(&request_with(Some("LIST"), &[], &[]));

    assert_eq!(command.len(), 6);
    assert_eq!(command[5], "--flamingock.operation=LIST");
}

#[test]
fn building_is_deterministic() {
    let request = LaunchRequest::builder(JAR)
        .operation(Some("EXECUTE"))
        .log_level(Some("trace"))
        .operation_args([("z", "1"), ("a", "2")])
        .runtime_args(strings(&["-Xmx512m"]))
        .app_args(strings(&["--x=y"]))
        .build();
    let launcher = launcher();

    for variant in [Variant::ManagedRuntimeBundle, Variant::FlatExecutableBundle] {
        let first = launcher.build_command(&request, variant);
        for _ in 0..10 {
            assert_eq!(first, launcher.build_command(&request, variant));
        }
    }
}
