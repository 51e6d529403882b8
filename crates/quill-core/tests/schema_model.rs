use pretty_assertions::assert_eq;
use quill_core::{
    schema::{
        field::{IntegerField, StringField, TimestampConfig, TimestampField},
        Field, FieldMeta, FieldTy, Model, ModelConfig,
    },
    stmt::Value,
    time::FixedClock,
};
use std::sync::Arc;

fn post() -> Model {
    Model::builder("post")
        .field("title", StringField::new())
        .field_with(
            "created_at",
            FieldMeta::new().column("created"),
            TimestampField::new(TimestampConfig::new().auto_set_on_create(true)),
        )
        .field_with(
            "published_at",
            FieldMeta::new().css_class("datepicker").label("Go live"),
            TimestampField::new(TimestampConfig::new().nullable(true)),
        )
        .build()
        .unwrap()
}

#[test]
fn base_initialization_fills_names() {
    let model = post();
    let title = model.field("title").unwrap();

    assert_eq!(
        title.meta,
        FieldMeta {
            model: "post".to_string(),
            name: "title".to_string(),
            column: Some("title".to_string()),
            label: Some("Title".to_string()),
            css_class: vec![],
        }
    );
}

#[test]
fn timestamp_fields_get_a_presentation_hint() {
    let model = post();

    let created = model.field("created_at").unwrap();
    assert_eq!(created.meta.css_class, vec!["timestamp".to_string()]);
    assert_eq!(created.meta.label_text(), "Created At");
    assert_eq!(created.column(), "created");
    assert!(created.ty().is_timestamp());

    let published = model.field("published_at").unwrap();
    assert_eq!(
        published.meta.css_class,
        vec!["datepicker".to_string(), "timestamp".to_string()]
    );
    assert_eq!(published.meta.label_text(), "Go live");
}

#[test]
fn initialize_does_not_repeat_the_hint() {
    let field = TimestampField::new(TimestampConfig::new());
    let mut meta = FieldMeta::new();

    field.initialize(&mut meta, "post", "created_at");
    field.initialize(&mut meta, "post", "created_at");

    assert_eq!(meta.css_class, vec!["timestamp".to_string()]);
}

#[test]
fn fields_keep_declaration_order() {
    let model = post();
    let names: Vec<_> = model.fields().map(|field| field.name()).collect();
    assert_eq!(names, ["title", "created_at", "published_at"]);
}

#[test]
fn lookup_by_column() {
    let model = post();
    assert_eq!(model.field_by_column("created").unwrap().name(), "created_at");
    assert!(model.field_by_column("created_at").is_none());
    assert!(model.field("missing").is_none());
}

#[test]
fn duplicate_field_names_are_rejected() {
    let err = Model::builder("post")
        .field("title", StringField::new())
        .field("title", IntegerField::new())
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: duplicate field `title` on model `post`"
    );
}

#[test]
fn duplicate_columns_are_rejected() {
    let err = Model::builder("post")
        .field("created", StringField::new())
        .field_with(
            "created_at",
            FieldMeta::new().column("created"),
            StringField::new(),
        )
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn model_from_json() {
    let clock = Arc::new(FixedClock::from_second(1_700_000_000).unwrap());
    let model = Model::from_json(
        r#"{
            "name": "comment",
            "fields": {
                "body": { "type": "string", "nullable": true },
                "votes": { "type": "integer" },
                "hidden": { "type": "boolean" },
                "created": {
                    "type": "timestamp",
                    "column": "created_on",
                    "auto_set_on_create": true,
                    "storage_format": "Y-m-d H:i:s"
                }
            }
        }"#,
        clock,
    )
    .unwrap();

    assert_eq!(model.name, "comment");
    assert!(matches!(
        model.field("body").unwrap().ty(),
        FieldTy::String(StringField { nullable: true })
    ));
    assert!(matches!(model.field("hidden").unwrap().ty(), FieldTy::Boolean(_)));

    let created = model.field("created").unwrap();
    assert_eq!(created.column(), "created_on");

    let timestamp = created.ty().as_timestamp().unwrap();
    assert_eq!(
        timestamp.config(),
        &TimestampConfig::new()
            .auto_set_on_create(true)
            .storage_format("Y-m-d H:i:s")
    );

    // The configured clock is the one used for auto-stamping
    assert_eq!(
        created.ty.save(Value::Null, false),
        Value::from("2023-11-14 22:13:20")
    );
}

#[test]
fn model_config_errors() {
    let err = ModelConfig::from_json("{").unwrap_err();
    assert!(err.to_string().starts_with("invalid model declaration: "));

    let err = ModelConfig::from_json(r#"{ "name": "x", "fields": { "a": { "type": "money" } } }"#)
        .unwrap_err();
    assert!(err.to_string().contains("money"));

    let err = ModelConfig::from_json(r#"{ "name": "empty" }"#).unwrap_err();
    assert!(err.is_invalid_schema());
}
