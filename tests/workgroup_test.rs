use athena_local::api::types::*;
use athena_local::models::{
    EncryptionConfiguration, ResultConfiguration, WorkGroupConfiguration,
};
use athena_local::{AthenaApi, BackendRegistry, ErrorKind, DEFAULT_ACCOUNT_ID};

fn create_api() -> AthenaApi {
    let registry = BackendRegistry::new();
    AthenaApi::new(registry.scope(DEFAULT_ACCOUNT_ID, "us-east-1"))
}

fn basic_configuration() -> WorkGroupConfiguration {
    WorkGroupConfiguration {
        result_configuration: ResultConfiguration {
            output_location: Some("s3://bucket-name/prefix/".to_string()),
            encryption_configuration: None,
        },
        enforce_work_group_configuration: true,
        ..Default::default()
    }
}

fn create_basic_work_group(api: &AthenaApi, name: &str) {
    api.create_work_group(CreateWorkGroupInput {
        name: name.to_string(),
        description: "Test work group".to_string(),
        configuration: basic_configuration(),
    })
    .unwrap();
}

#[test]
fn test_create_work_group() {
    let api = create_api();
    api.create_work_group(CreateWorkGroupInput {
        name: "athena_workgroup".to_string(),
        description: "Test work group".to_string(),
        configuration: WorkGroupConfiguration {
            result_configuration: ResultConfiguration {
                output_location: Some("s3://bucket-name/prefix/".to_string()),
                encryption_configuration: Some(EncryptionConfiguration {
                    encryption_option: "SSE_KMS".to_string(),
                    kms_key: Some("aws:arn:kms:1233456789:us-east-1:key/number-1".to_string()),
                }),
            },
            ..Default::default()
        },
    })
    .unwrap();

    // the second time should fail
    let err = api
        .create_work_group(CreateWorkGroupInput {
            name: "athena_workgroup".to_string(),
            description: "duplicate".to_string(),
            configuration: WorkGroupConfiguration::default(),
        })
        .unwrap_err();
    assert_eq!(err.code(), "InvalidRequestException");
    assert_eq!(err.message, "WorkGroup already exists");
    assert_eq!(err.kind, ErrorKind::AlreadyExists);

    let listing = api.list_work_groups(ListWorkGroupsInput::default()).unwrap();
    let work_groups: Vec<_> = listing
        .work_groups
        .iter()
        .filter(|wg| wg.name != "primary")
        .collect();
    assert_eq!(work_groups.len(), 1);
    assert_eq!(work_groups[0].name, "athena_workgroup");
    assert_eq!(work_groups[0].description, "Test work group");
    assert_eq!(work_groups[0].state, "ENABLED");
}

#[test]
fn test_get_primary_work_group() {
    let api = create_api();
    assert!(
        !api.list_work_groups(ListWorkGroupsInput::default())
            .unwrap()
            .work_groups
            .is_empty()
    );

    let primary = api
        .get_work_group(GetWorkGroupInput {
            work_group: "primary".to_string(),
        })
        .unwrap()
        .work_group;
    assert_eq!(primary.name, "primary");
    assert_eq!(primary.configuration, WorkGroupConfiguration::default());
    assert!(!primary.configuration.enforce_work_group_configuration);
    assert!(!primary.configuration.publish_cloud_watch_metrics_enabled);
    assert!(!primary.configuration.requester_pays_enabled);
    assert_eq!(
        primary.configuration.engine_version.selected_engine_version,
        "AUTO"
    );
    assert_eq!(
        primary.configuration.engine_version.effective_engine_version,
        "Athena engine version 3"
    );
    assert!(
        !primary
            .configuration
            .enable_minimum_encryption_configuration
    );
}

#[test]
fn test_primary_cannot_be_created() {
    let api = create_api();
    let err = api
        .create_work_group(CreateWorkGroupInput {
            name: "primary".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.message, "WorkGroup already exists");
}

#[test]
fn test_create_and_get_work_group() {
    let api = create_api();
    create_basic_work_group(&api, "athena_workgroup");

    let work_group = api
        .get_work_group(GetWorkGroupInput {
            work_group: "athena_workgroup".to_string(),
        })
        .unwrap()
        .work_group;
    assert_eq!(work_group.name, "athena_workgroup");
    assert_eq!(work_group.state, "ENABLED");
    assert_eq!(work_group.description, "Test work group");
    // caller-supplied keys override the defaults, unset keys keep them
    assert_eq!(
        work_group
            .configuration
            .result_configuration
            .output_location
            .as_deref(),
        Some("s3://bucket-name/prefix/")
    );
    assert!(work_group.configuration.enforce_work_group_configuration);
    assert!(!work_group.configuration.publish_cloud_watch_metrics_enabled);
    assert_eq!(
        work_group.configuration.engine_version.effective_engine_version,
        "Athena engine version 3"
    );

    api.delete_work_group(DeleteWorkGroupInput {
        work_group: "athena_workgroup".to_string(),
        recursive_delete_option: None,
    })
    .unwrap();
    assert!(
        api.get_work_group(GetWorkGroupInput {
            work_group: "athena_workgroup".to_string(),
        })
        .is_err()
    );
}

#[test]
fn test_get_missing_work_group() {
    let api = create_api();
    let err = api
        .get_work_group(GetWorkGroupInput {
            work_group: "unknown".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.code(), "InvalidRequestException");
    assert_eq!(err.message, "WorkGroup does not exist");
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_delete_missing_work_group() {
    let api = create_api();
    let err = api
        .delete_work_group(DeleteWorkGroupInput {
            work_group: "unknown".to_string(),
            recursive_delete_option: None,
        })
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_primary_survives_create_and_delete_churn() {
    let api = create_api();
    for name in ["wg-a", "wg-b", "wg-c"] {
        create_basic_work_group(&api, name);
    }
    for name in ["wg-a", "wg-c"] {
        api.delete_work_group(DeleteWorkGroupInput {
            work_group: name.to_string(),
            recursive_delete_option: None,
        })
        .unwrap();
    }

    let listing = api.list_work_groups(ListWorkGroupsInput::default()).unwrap();
    let primaries = listing
        .work_groups
        .iter()
        .filter(|wg| wg.name == "primary")
        .count();
    assert_eq!(primaries, 1);

    let err = api
        .delete_work_group(DeleteWorkGroupInput {
            work_group: "primary".to_string(),
            recursive_delete_option: None,
        })
        .unwrap_err();
    assert_eq!(err.message, "The primary workgroup cannot be deleted");
}

#[test]
fn test_list_work_groups_pagination() {
    let api = create_api();
    for name in ["wg-a", "wg-b", "wg-c"] {
        create_basic_work_group(&api, name);
    }

    // 4 workgroups total with primary; walk them two at a time
    let first = api
        .list_work_groups(ListWorkGroupsInput {
            next_token: None,
            max_results: Some(2),
        })
        .unwrap();
    assert_eq!(first.work_groups.len(), 2);
    assert_eq!(first.work_groups[0].name, "primary");
    let token = first.next_token.expect("expected a continuation token");

    let second = api
        .list_work_groups(ListWorkGroupsInput {
            next_token: Some(token),
            max_results: Some(2),
        })
        .unwrap();
    assert_eq!(second.work_groups.len(), 2);
    assert!(second.next_token.is_none());

    let err = api
        .list_work_groups(ListWorkGroupsInput {
            next_token: Some("bogus".to_string()),
            max_results: None,
        })
        .unwrap_err();
    assert_eq!(err.message, "Invalid NextToken");
}
