//! End-to-end product update: rehydrate, edit, submit

use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;
use storefront_client::ApiFailure;
use storefront_model::{Category, PreviewLedger};
use storefront_test_utils::{
    map_fetcher, png_handle, png_image, sample_product_record, ScriptedProductGateway,
};
use storefront_workflow::prelude::*;
use storefront_workflow::{ToastKind, PICTURES_FIELD, PRODUCT_LIST_ROUTE, UPDATE_SUCCESS_MESSAGE};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

async fn seeded_workflow(
    gateway: Arc<ScriptedProductGateway>,
) -> (ProductUpdateWorkflow, PreviewLedger) {
    let record = sample_product_record();
    let ledger = PreviewLedger::new();

    let fetcher = map_fetcher(&[
        ("https://cdn.example/p1-a.png", png_image(11)),
        ("https://cdn.example/p1-b.png", png_image(12)),
        ("https://cdn.example/p1-c.png", png_image(13)),
        ("https://cdn.example/p1-d.png", png_image(14)),
    ]);
    let rehydrator = RemoteImageRehydrator::new(fetcher, ledger.clone());
    let rehydration = rehydrator
        .rehydrate(&record.product_pictures, &CancelToken::new())
        .await;
    assert_eq!(rehydration.status, RehydrationStatus::Ready);

    let workflow = ProductUpdateWorkflow::seed(
        gateway,
        &record,
        rehydration.pictures,
        PictureRules::default(),
        ledger.clone(),
    );
    (workflow, ledger)
}

#[tokio::test]
async fn successful_submit_posts_ordered_multipart_and_signals() {
    let gateway = Arc::new(ScriptedProductGateway::new());
    let (mut workflow, _ledger) = seeded_workflow(Arc::clone(&gateway)).await;

    assert_eq!(workflow.phase(), WorkflowPhase::Editing);
    assert_eq!(workflow.pictures().len(), 4);
    assert_eq!(workflow.draft().product_price, "120");
    assert_eq!(workflow.draft().expire_date, "2030-01-15");

    workflow.submit(today(), &CancelToken::new()).await.unwrap();
    assert_eq!(workflow.phase(), WorkflowPhase::Succeeded);

    let captured = gateway.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].product_id, "p-1");

    let form = &captured[0].form;
    let names: Vec<_> = form.parts().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "productName",
            "productCategory",
            "productPrice",
            "productDiscount",
            "productCurrency",
            "expireDate",
            "stockLevel",
            "productDescription",
            PICTURES_FIELD,
            PICTURES_FIELD,
            PICTURES_FIELD,
            PICTURES_FIELD,
        ]
    );
    // picture parts keep rehydration order
    let sizes: Vec<_> = form.files(PICTURES_FIELD).iter().map(|h| h.size()).collect();
    assert_eq!(sizes, [11, 12, 13, 14]);

    let signals = workflow.drain_signals();
    assert_eq!(
        signals,
        [
            UiSignal::Toast {
                kind: ToastKind::Success,
                message: UPDATE_SUCCESS_MESSAGE.to_string(),
            },
            UiSignal::Navigate {
                to: PRODUCT_LIST_ROUTE.to_string(),
            },
        ]
    );
    assert!(workflow.drain_signals().is_empty());
}

#[tokio::test]
async fn too_few_pictures_blocks_without_network_call() {
    let gateway = Arc::new(ScriptedProductGateway::new());
    let (mut workflow, _ledger) = seeded_workflow(Arc::clone(&gateway)).await;

    workflow.pictures_mut().remove_at(0).unwrap();
    let err = workflow.submit(today(), &CancelToken::new()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Pictures(_)));
    assert_eq!(workflow.phase(), WorkflowPhase::Editing);
    assert!(gateway.captured().is_empty());
    assert_eq!(
        workflow.last_error(),
        Some("You must upload at least 4 pictures.")
    );
}

#[tokio::test]
async fn invalid_field_blocks_without_network_call() {
    let gateway = Arc::new(ScriptedProductGateway::new());
    let (mut workflow, _ledger) = seeded_workflow(Arc::clone(&gateway)).await;

    workflow.draft_mut().product_price = "free".into();
    let err = workflow.submit(today(), &CancelToken::new()).await.unwrap_err();

    match err {
        SubmitError::Validation(errors) => {
            assert!(errors.message_for("productPrice").is_some());
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(gateway.captured().is_empty());
    assert_eq!(workflow.phase(), WorkflowPhase::Editing);
}

#[tokio::test]
async fn unknown_category_blocks_once_directory_is_ready() {
    let gateway = Arc::new(ScriptedProductGateway::new());
    gateway.set_categories(vec![Category {
        id: "cat-1".into(),
        category_name: "Peripherals".into(),
    }]);
    let (mut workflow, _ledger) = seeded_workflow(Arc::clone(&gateway)).await;

    // sample record uses cat-9, which the directory does not know
    workflow.load_categories().await;
    let err = workflow.submit(today(), &CancelToken::new()).await.unwrap_err();

    match err {
        SubmitError::Validation(errors) => {
            assert_eq!(
                errors.message_for("productCategory"),
                Some("Unknown product category")
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_submit_is_resumable_with_data_intact() {
    let gateway = Arc::new(ScriptedProductGateway::new());
    gateway.push_update_result(Err(ApiFailure::response(
        422,
        "Unprocessable Entity",
        Some(json!({ "error": "stock conflict" })),
    )));
    let (mut workflow, _ledger) = seeded_workflow(Arc::clone(&gateway)).await;

    let err = workflow.submit(today(), &CancelToken::new()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Api(_)));
    assert_eq!(workflow.phase(), WorkflowPhase::Failed);
    assert_eq!(workflow.last_error(), Some("stock conflict"));
    assert_eq!(
        workflow.drain_signals(),
        [UiSignal::Toast {
            kind: ToastKind::Error,
            message: "stock conflict".to_string(),
        }]
    );

    // nothing was discarded
    workflow.resume_editing();
    assert_eq!(workflow.phase(), WorkflowPhase::Editing);
    assert_eq!(workflow.pictures().len(), 4);
    assert_eq!(workflow.draft().product_name, "Keyboard");

    // second attempt goes through
    workflow.submit(today(), &CancelToken::new()).await.unwrap();
    assert_eq!(workflow.phase(), WorkflowPhase::Succeeded);
    assert_eq!(gateway.captured().len(), 2);
}

#[tokio::test]
async fn cancelled_submit_settles_quietly() {
    let gateway = Arc::new(ScriptedProductGateway::new());
    let (mut workflow, _ledger) = seeded_workflow(Arc::clone(&gateway)).await;

    let cancel = CancelToken::new();
    cancel.cancel();
    let err = workflow.submit(today(), &cancel).await.unwrap_err();

    assert!(matches!(err, SubmitError::Cancelled));
    assert_eq!(workflow.phase(), WorkflowPhase::Editing);
    assert!(workflow.drain_signals().is_empty());
}

#[tokio::test]
async fn pictures_can_be_edited_between_attempts() {
    let gateway = Arc::new(ScriptedProductGateway::new());
    let (mut workflow, ledger) = seeded_workflow(Arc::clone(&gateway)).await;

    workflow
        .pictures_mut()
        .add_upload(vec![png_handle("extra.png", 64)])
        .unwrap();
    assert_eq!(workflow.pictures().len(), 5);
    assert_eq!(ledger.live(), 5);

    workflow.submit(today(), &CancelToken::new()).await.unwrap();
    let form = &gateway.captured()[0].form;
    assert_eq!(form.files(PICTURES_FIELD).len(), 5);
    assert_eq!(form.files(PICTURES_FIELD)[4].name, "extra.png");
}
