use std::collections::HashMap;

use athena_local::api::types::*;
use athena_local::models::{ResultConfiguration, WorkGroupConfiguration};
use athena_local::{AthenaApi, BackendRegistry, ErrorKind, DEFAULT_ACCOUNT_ID};

fn create_api() -> AthenaApi {
    let registry = BackendRegistry::new();
    AthenaApi::new(registry.scope(DEFAULT_ACCOUNT_ID, "us-east-1"))
}

fn create_basic_work_group(api: &AthenaApi, name: &str) {
    api.create_work_group(CreateWorkGroupInput {
        name: name.to_string(),
        description: "Test work group".to_string(),
        configuration: WorkGroupConfiguration {
            result_configuration: ResultConfiguration {
                output_location: Some("s3://bucket-name/prefix/".to_string()),
                encryption_configuration: None,
            },
            ..Default::default()
        },
    })
    .unwrap();
}

fn catalog_parameters() -> HashMap<String, String> {
    HashMap::from([("catalog-id".to_string(), "AWS Test account ID".to_string())])
}

#[test]
fn test_create_data_catalog() {
    let api = create_api();
    api.create_data_catalog(CreateDataCatalogInput {
        name: "athena_datacatalog".to_string(),
        catalog_type: "GLUE".to_string(),
        description: "Test data catalog".to_string(),
        parameters: catalog_parameters(),
    })
    .unwrap();

    // the second time should fail
    let err = api
        .create_data_catalog(CreateDataCatalogInput {
            name: "athena_datacatalog".to_string(),
            catalog_type: "GLUE".to_string(),
            description: "Test data catalog".to_string(),
            parameters: catalog_parameters(),
        })
        .unwrap_err();
    assert_eq!(err.code(), "InvalidRequestException");
    assert_eq!(err.message, "DataCatalog already exists");
    assert_eq!(err.kind, ErrorKind::AlreadyExists);

    let listing = api
        .list_data_catalogs(ListDataCatalogsInput::default())
        .unwrap();
    assert_eq!(listing.data_catalogs_summary.len(), 1);
    assert_eq!(
        listing.data_catalogs_summary[0].catalog_name,
        "athena_datacatalog"
    );
    assert_eq!(listing.data_catalogs_summary[0].catalog_type, "GLUE");
}

#[test]
fn test_create_and_get_data_catalog() {
    let api = create_api();
    api.create_data_catalog(CreateDataCatalogInput {
        name: "athena_datacatalog".to_string(),
        catalog_type: "GLUE".to_string(),
        description: "Test data catalog".to_string(),
        parameters: catalog_parameters(),
    })
    .unwrap();

    let data_catalog = api
        .get_data_catalog(GetDataCatalogInput {
            name: "athena_datacatalog".to_string(),
        })
        .unwrap()
        .data_catalog;
    assert_eq!(data_catalog.name, "athena_datacatalog");
    assert_eq!(data_catalog.description, "Test data catalog");
    assert_eq!(data_catalog.catalog_type, "GLUE");
    assert_eq!(data_catalog.parameters, catalog_parameters());
}

#[test]
fn test_get_missing_data_catalog() {
    let api = create_api();
    let err = api
        .get_data_catalog(GetDataCatalogInput {
            name: "unknown".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.message, "DataCatalog does not exist");
}

#[test]
fn test_create_named_query() {
    let api = create_api();
    let output = api
        .create_named_query(CreateNamedQueryInput {
            name: "query-name".to_string(),
            database: "target_db".to_string(),
            query_string: "SELECT * FROM table1".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert!(!output.named_query_id.is_empty());
}

#[test]
fn test_get_named_query() {
    let api = create_api();
    let query_id = api
        .create_named_query(CreateNamedQueryInput {
            name: "query-name".to_string(),
            database: "target_db".to_string(),
            query_string: "SELECT * FROM tbl1".to_string(),
            description: Some("description of this query".to_string()),
            work_group: None,
        })
        .unwrap()
        .named_query_id;

    let named_query = api
        .get_named_query(GetNamedQueryInput {
            named_query_id: query_id.clone(),
        })
        .unwrap()
        .named_query;
    assert_eq!(named_query.name, "query-name");
    assert_eq!(
        named_query.description.as_deref(),
        Some("description of this query")
    );
    assert_eq!(named_query.database, "target_db");
    assert_eq!(named_query.query_string, "SELECT * FROM tbl1");
    assert_eq!(named_query.named_query_id, query_id);
}

#[test]
fn test_get_missing_named_query() {
    let api = create_api();
    let err = api
        .get_named_query(GetNamedQueryInput {
            named_query_id: "nq-1".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.message, "NamedQuery nq-1 was not found");
}

#[test]
fn test_list_named_queries() {
    let api = create_api();
    create_basic_work_group(&api, "athena_workgroup");
    let query_id = api
        .create_named_query(CreateNamedQueryInput {
            name: "query-name".to_string(),
            database: "target_db".to_string(),
            query_string: "SELECT * FROM table1".to_string(),
            description: None,
            work_group: Some("athena_workgroup".to_string()),
        })
        .unwrap()
        .named_query_id;

    let listing = api
        .list_named_queries(ListNamedQueriesInput {
            work_group: Some("athena_workgroup".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(listing.named_query_ids, vec![query_id]);

    // no filter means the primary workgroup
    let listing = api
        .list_named_queries(ListNamedQueriesInput::default())
        .unwrap();
    assert!(listing.named_query_ids.is_empty());
}

#[test]
fn test_create_prepared_statement() {
    let api = create_api();
    create_basic_work_group(&api, "athena_workgroup");
    api.create_prepared_statement(CreatePreparedStatementInput {
        statement_name: "test-statement".to_string(),
        work_group: "athena_workgroup".to_string(),
        query_statement: "SELECT * FROM table1".to_string(),
        description: None,
    })
    .unwrap();
}

#[test]
fn test_create_prepared_statement_requires_work_group() {
    let api = create_api();
    let err = api
        .create_prepared_statement(CreatePreparedStatementInput {
            statement_name: "test-statement".to_string(),
            work_group: "unknown_workgroup".to_string(),
            query_statement: "SELECT * FROM table1".to_string(),
            description: None,
        })
        .unwrap_err();
    assert_eq!(err.code(), "InvalidRequestException");
    assert_eq!(err.message, "WorkGroup does not exist");
}

#[test]
fn test_get_prepared_statement() {
    let api = create_api();
    create_basic_work_group(&api, "athena_workgroup");
    api.create_prepared_statement(CreatePreparedStatementInput {
        statement_name: "stmt-name".to_string(),
        work_group: "athena_workgroup".to_string(),
        query_statement: "SELECT * FROM table1".to_string(),
        description: None,
    })
    .unwrap();

    let statement = api
        .get_prepared_statement(GetPreparedStatementInput {
            statement_name: "stmt-name".to_string(),
            work_group: "athena_workgroup".to_string(),
        })
        .unwrap()
        .prepared_statement;
    assert_eq!(statement.statement_name, "stmt-name");
    assert_eq!(statement.work_group_name, "athena_workgroup");
    assert_eq!(statement.query_statement, "SELECT * FROM table1");
}

#[test]
fn test_get_missing_prepared_statement() {
    let api = create_api();
    create_basic_work_group(&api, "athena_workgroup");
    let err = api
        .get_prepared_statement(GetPreparedStatementInput {
            statement_name: "stmt-name".to_string(),
            work_group: "athena_workgroup".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.message, "PreparedStatement stmt-name was not found");
}
