use super::test_support::{FakeService, ServiceCall, controller_with, settle};
use crate::egui_app::state::{
    CatalogPhase, METRICS_UNAVAILABLE, MODELS_UNAVAILABLE, OperationState, Outcome, SessionError,
};
use crate::service::types::fixtures::svm_metrics;
use crate::service::{
    PredictedClass, PredictionResponse, ScatterDataset, ScatterPoint, ServiceError, TrainResponse,
};
use crate::training::{Feature, ModelFamily};
use std::path::PathBuf;
use tempfile::TempDir;

fn prediction(class: PredictedClass) -> PredictionResponse {
    PredictionResponse {
        predicted_class: class,
        extra: serde_json::Map::new(),
    }
}

fn audio_file(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"RIFF0000WAVEfmt ").unwrap();
    path
}

fn is_metrics_call(call: &ServiceCall) -> bool {
    matches!(call, ServiceCall::FetchMetrics(_))
}

#[test]
fn start_session_selects_first_model_and_fetches_its_metrics() {
    let service = FakeService::new();
    service.push_models(Ok(vec!["m1", "m2"]));
    service.set_metrics("m1", Ok(Some(svm_metrics(0.9))));
    let mut controller = controller_with(&service);

    controller.start_session();
    settle(&mut controller);

    assert_eq!(controller.ui.catalog.models, vec!["m1", "m2"]);
    assert_eq!(controller.ui.catalog.phase, CatalogPhase::Loaded);
    assert_eq!(controller.selected_model(), Some("m1"));
    assert_eq!(controller.ui.selection.metrics, Some(svm_metrics(0.9)));
    assert!(service.calls().contains(&ServiceCall::FetchMetrics("m1".into())));
    assert!(service.calls().contains(&ServiceCall::FetchScatter));
    assert_eq!(service.count(is_metrics_call), 1);
    assert!(controller.ui.error.is_none());
}

#[test]
fn start_session_runs_once() {
    let service = FakeService::new();
    let mut controller = controller_with(&service);
    controller.start_session();
    controller.start_session();
    settle(&mut controller);

    assert_eq!(service.count(|call| *call == ServiceCall::ListModels), 1);
    assert_eq!(service.count(|call| *call == ServiceCall::FetchScatter), 1);
}

#[test]
fn loaded_list_does_not_override_existing_selection() {
    let service = FakeService::new();
    service.push_models(Ok(vec!["m1", "m2"]));
    let mut controller = controller_with(&service);

    controller.select_model("m2");
    controller.start_session();
    settle(&mut controller);

    assert_eq!(controller.selected_model(), Some("m2"));
    assert_eq!(
        service.calls().iter().filter(|call| is_metrics_call(call)).collect::<Vec<_>>(),
        vec![&ServiceCall::FetchMetrics("m2".into())]
    );
}

#[test]
fn empty_model_list_leaves_selection_empty() {
    let service = FakeService::new();
    service.push_models(Ok(Vec::new()));
    let mut controller = controller_with(&service);

    controller.start_session();
    settle(&mut controller);

    assert_eq!(controller.ui.catalog.phase, CatalogPhase::Loaded);
    assert_eq!(controller.selected_model(), None);
    assert_eq!(service.count(is_metrics_call), 0);
}

#[test]
fn failed_model_list_surfaces_network_error() {
    let service = FakeService::new();
    service.push_models(Err(ServiceError::Network("HTTP 500".into())));
    let mut controller = controller_with(&service);

    controller.start_session();
    settle(&mut controller);

    assert_eq!(controller.ui.catalog.phase, CatalogPhase::Uninitialized);
    assert_eq!(
        controller.ui.operations.fetch_models,
        OperationState::Settled(Outcome::Failure)
    );
    let error = controller.ui.error.clone().unwrap();
    assert_eq!(error.to_string(), MODELS_UNAVAILABLE);
    assert_eq!(controller.ui.status.badge_label, "Error");
}

#[test]
fn failed_refresh_keeps_previous_list() {
    let service = FakeService::new();
    service.push_models(Ok(vec!["m1"]));
    service.push_models(Err(ServiceError::Network("down".into())));
    let mut controller = controller_with(&service);

    controller.start_session();
    settle(&mut controller);
    controller.refresh_catalog();
    assert_eq!(controller.ui.catalog.phase, CatalogPhase::Loading);
    settle(&mut controller);

    assert_eq!(controller.ui.catalog.phase, CatalogPhase::Loaded);
    assert_eq!(controller.ui.catalog.models, vec!["m1"]);
    assert!(matches!(controller.ui.error, Some(SessionError::Network { .. })));
}

#[test]
fn reloading_models_clears_stale_error() {
    let service = FakeService::new();
    service.push_models(Err(ServiceError::Network("down".into())));
    service.push_models(Ok(vec!["m1"]));
    let mut controller = controller_with(&service);
    controller.start_session();
    settle(&mut controller);
    assert!(controller.ui.error.is_some());

    controller.reload_models();
    assert!(controller.ui.error.is_none());
    settle(&mut controller);

    assert!(controller.ui.error.is_none());
    assert_eq!(controller.ui.catalog.phase, CatalogPhase::Loaded);
    assert_eq!(controller.selected_model(), Some("m1"));
}

#[test]
fn missing_metrics_are_absent_without_error() {
    let service = FakeService::new();
    service.set_metrics("fresh", Ok(None));
    let mut controller = controller_with(&service);

    controller.select_model("fresh");
    settle(&mut controller);

    assert_eq!(controller.ui.selection.metrics, None);
    assert!(controller.ui.error.is_none());
    assert_eq!(
        controller.ui.operations.fetch_metrics,
        OperationState::Settled(Outcome::Success)
    );
}

#[test]
fn failed_metrics_fetch_clears_metrics_and_reports() {
    let service = FakeService::new();
    service.set_metrics("m1", Ok(Some(svm_metrics(0.9))));
    let mut controller = controller_with(&service);
    controller.select_model("m1");
    settle(&mut controller);
    assert!(controller.ui.selection.metrics.is_some());

    service.set_metrics("m1", Err(ServiceError::Network("HTTP 502".into())));
    controller.select_model("m1");
    settle(&mut controller);

    assert_eq!(controller.ui.selection.metrics, None);
    assert_eq!(
        controller.ui.error.as_ref().map(ToString::to_string).as_deref(),
        Some(METRICS_UNAVAILABLE)
    );
}

#[test]
fn switching_models_clears_prediction_but_reselecting_keeps_it() {
    let dir = tempfile::tempdir().unwrap();
    let service = FakeService::new();
    service.push_predict(Ok(prediction(PredictedClass::Index(0))));
    let mut controller = controller_with(&service);
    controller.select_model("m1");
    controller.choose_file(&audio_file(&dir, "dog.wav"));
    controller.submit_prediction();
    settle(&mut controller);
    assert!(controller.ui.selection.prediction.is_some());

    controller.select_model("m1");
    settle(&mut controller);
    assert!(controller.ui.selection.prediction.is_some());

    controller.select_model("m2");
    assert!(controller.ui.selection.prediction.is_none());
    settle(&mut controller);
    assert_eq!(service.count(is_metrics_call), 3);
    assert!(controller.ui.upload.is_some());
}

#[test]
fn invalid_file_keeps_previous_upload() {
    let dir = tempfile::tempdir().unwrap();
    let service = FakeService::new();
    let mut controller = controller_with(&service);

    controller.choose_file(&audio_file(&dir, "rooster.wav"));
    assert!(controller.ui.error.is_none());
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "hello").unwrap();
    controller.choose_file(&notes);

    assert_eq!(controller.ui.upload.as_ref().map(|f| f.name()), Some("rooster.wav"));
    let error = controller.ui.error.clone().unwrap();
    assert!(matches!(error, SessionError::Validation { .. }));
    assert_eq!(error.to_string(), "Please select a valid audio file");
}

#[test]
fn dropped_bytes_are_validated_by_mime_type() {
    let service = FakeService::new();
    let mut controller = controller_with(&service);

    controller.choose_file_bytes("clip.ogg", Some("audio/ogg"), vec![1, 2, 3]);
    controller.choose_file_bytes("photo.png", Some("image/png"), vec![1]);

    assert_eq!(controller.ui.upload.as_ref().map(|f| f.mime()), Some("audio/ogg"));
    assert!(matches!(controller.ui.error, Some(SessionError::Validation { .. })));
}

#[test]
fn training_success_replaces_metrics_and_refreshes_catalog() {
    let service = FakeService::new();
    service.push_models(Ok(vec!["m1"]));
    service.push_models(Ok(vec!["m1", "birds"]));
    service.set_metrics("m1", Ok(Some(svm_metrics(0.5))));
    service.push_train(Ok(TrainResponse {
        message: "Model trained successfully".into(),
        metrics: svm_metrics(0.95),
    }));
    let mut controller = controller_with(&service);
    controller.start_session();
    settle(&mut controller);

    controller.set_model_name("birds");
    controller.set_model_family(ModelFamily::Knn);
    controller.set_svm_c(2.5);
    controller.set_feature(Feature::Hnr, false);
    let config_before = controller.training_config().clone();
    controller.submit_training();
    assert_eq!(controller.ui.operations.train, OperationState::InFlight);
    settle(&mut controller);

    assert_eq!(controller.ui.selection.metrics, Some(svm_metrics(0.95)));
    assert_eq!(
        controller.ui.training.last_message.as_deref(),
        Some("Model trained successfully")
    );
    assert_eq!(controller.training_config(), &config_before);
    assert_eq!(controller.ui.catalog.models, vec!["m1", "birds"]);
    assert_eq!(service.count(|call| *call == ServiceCall::ListModels), 2);
    assert_eq!(
        controller.ui.operations.train,
        OperationState::Settled(Outcome::Success)
    );
    assert!(service.calls().contains(&ServiceCall::Train(config_before)));
}

#[test]
fn training_sends_inactive_family_values() {
    let service = FakeService::new();
    let mut controller = controller_with(&service);
    controller.set_model_family(ModelFamily::RandomForest);
    controller.set_knn_neighbors(9);
    controller.submit_training();
    settle(&mut controller);

    let sent = service
        .calls()
        .into_iter()
        .find_map(|call| match call {
            ServiceCall::Train(config) => Some(config),
            _ => None,
        })
        .unwrap();
    assert_eq!(sent.model_family(), ModelFamily::RandomForest);
    assert_eq!(sent.knn_neighbors(), 9);
    assert_eq!(sent.svm_c(), 1.0);
    assert_eq!(sent.svm_gamma(), 0.01);
}

#[test]
fn training_failure_keeps_config_and_metrics() {
    let service = FakeService::new();
    service.set_metrics("m1", Ok(Some(svm_metrics(0.5))));
    service.push_train(Err(ServiceError::TrainingFailed("HTTP 500".into())));
    let mut controller = controller_with(&service);
    controller.select_model("m1");
    settle(&mut controller);
    controller.set_rf_estimators(300);
    let config_before = controller.training_config().clone();

    controller.submit_training();
    settle(&mut controller);

    assert_eq!(controller.training_config(), &config_before);
    assert_eq!(controller.ui.selection.metrics, Some(svm_metrics(0.5)));
    let error = controller.ui.error.clone().unwrap();
    assert_eq!(error.to_string(), "Failed to train model. Please try again.");
    assert_eq!(service.count(|call| *call == ServiceCall::ListModels), 0);
}

#[test]
fn training_trigger_is_suppressed_while_in_flight() {
    let service = FakeService::new();
    service.push_train(Ok(TrainResponse {
        message: "done".into(),
        metrics: svm_metrics(0.8),
    }));
    let release = service.hold_training();
    let mut controller = controller_with(&service);

    controller.submit_training();
    assert!(!controller.can_train());
    controller.submit_training();
    controller.poll_background_jobs();
    assert!(controller.ui.operations.is_loading());
    release.send(()).unwrap();
    settle(&mut controller);

    assert_eq!(
        service.count(|call| matches!(call, ServiceCall::Train(_))),
        1
    );
    assert!(controller.can_train());
}

#[test]
fn prediction_settles_while_training_is_in_flight() {
    let dir = tempfile::tempdir().unwrap();
    let service = FakeService::new();
    service.push_train(Ok(TrainResponse {
        message: "done".into(),
        metrics: svm_metrics(0.8),
    }));
    service.push_predict(Ok(prediction(PredictedClass::Index(42))));
    let release = service.hold_training();
    let mut controller = controller_with(&service);
    controller.select_model("m1");
    controller.choose_file(&audio_file(&dir, "siren.wav"));

    controller.submit_training();
    assert!(!controller.can_train());
    assert!(controller.can_predict());
    controller.submit_prediction();

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    while controller.ui.selection.prediction.is_none() {
        assert!(std::time::Instant::now() < deadline, "prediction never landed");
        controller.poll_background_jobs();
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    assert!(controller.ui.operations.train.is_in_flight());
    assert_eq!(
        controller.ui.operations.predict,
        OperationState::Settled(Outcome::Success)
    );

    release.send(()).unwrap();
    settle(&mut controller);
    assert_eq!(
        controller.ui.operations.train,
        OperationState::Settled(Outcome::Success)
    );
    assert_eq!(
        controller.ui.selection.prediction.as_ref().map(|p| p.model_name.as_str()),
        Some("m1")
    );
}

#[test]
fn blank_model_name_disables_training() {
    let service = FakeService::new();
    let mut controller = controller_with(&service);
    controller.set_model_name("  ");

    assert!(!controller.can_train());
    controller.submit_training();
    settle(&mut controller);

    assert!(service.calls().is_empty());
    assert_eq!(controller.ui.operations.train, OperationState::Idle);
}

#[test]
fn predict_without_file_or_model_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let service = FakeService::new();
    let mut controller = controller_with(&service);

    controller.submit_prediction();
    controller.choose_file(&audio_file(&dir, "dog.wav"));
    controller.submit_prediction();
    settle(&mut controller);
    assert!(service.calls().is_empty());

    let mut controller = controller_with(&service);
    controller.select_model("m1");
    settle(&mut controller);
    controller.submit_prediction();
    settle(&mut controller);
    assert_eq!(
        service.count(|call| matches!(call, ServiceCall::Predict { .. })),
        0
    );
    assert_eq!(controller.ui.operations.predict, OperationState::Idle);
}

#[test]
fn prediction_success_replaces_prior_result() {
    let dir = tempfile::tempdir().unwrap();
    let service = FakeService::new();
    service.push_predict(Ok(prediction(PredictedClass::Index(0))));
    service.push_predict(Ok(prediction(PredictedClass::Index(42))));
    let mut controller = controller_with(&service);
    controller.select_model("m1");
    controller.choose_file(&audio_file(&dir, "clip.wav"));

    controller.submit_prediction();
    settle(&mut controller);
    controller.submit_prediction();
    settle(&mut controller);

    let result = controller.ui.selection.prediction.clone().unwrap();
    assert_eq!(result.response.predicted_class, PredictedClass::Index(42));
    assert_eq!(result.model_name, "m1");
    assert_eq!(result.file_name, "clip.wav");
    assert!(controller.ui.upload.is_some());
    assert!(service.calls().contains(&ServiceCall::Predict {
        model: "m1".into(),
        file: "clip.wav".into(),
    }));
}

#[test]
fn prediction_for_deselected_model_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let service = FakeService::new();
    service.push_predict(Ok(prediction(PredictedClass::Index(1))));
    let release = service.hold_prediction();
    let mut controller = controller_with(&service);
    controller.select_model("m1");
    controller.choose_file(&audio_file(&dir, "rooster.wav"));

    controller.submit_prediction();
    controller.select_model("m2");
    release.send(()).unwrap();
    settle(&mut controller);

    assert!(controller.ui.selection.prediction.is_none());
    assert_eq!(controller.selected_model(), Some("m2"));
    assert_eq!(controller.ui.status.badge_label, "Warning");
    assert!(controller.ui.status.text.contains("rooster.wav"));
    assert!(controller.ui.status.text.contains("m1"));
}

#[test]
fn prediction_failure_reports_and_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let service = FakeService::new();
    service.push_predict(Err(ServiceError::PredictionFailed("HTTP 500".into())));
    let mut controller = controller_with(&service);
    controller.select_model("m1");
    controller.choose_file(&audio_file(&dir, "siren.wav"));

    controller.submit_prediction();
    settle(&mut controller);

    let error = controller.ui.error.clone().unwrap();
    assert_eq!(error.to_string(), "Failed to get prediction. Please try again.");
    assert_eq!(controller.ui.upload.as_ref().map(|f| f.name()), Some("siren.wav"));
    assert_eq!(
        controller.ui.operations.predict,
        OperationState::Settled(Outcome::Failure)
    );
}

#[test]
fn user_actions_clear_previous_error() {
    let service = FakeService::new();
    service.push_models(Err(ServiceError::Network("down".into())));
    let mut controller = controller_with(&service);
    controller.start_session();
    settle(&mut controller);
    assert!(controller.ui.error.is_some());

    controller.select_model("m1");
    assert!(controller.ui.error.is_none());
}

#[test]
fn scatter_failure_stays_out_of_error_slot() {
    let service = FakeService::new();
    service.set_scatter(Err(ServiceError::Network("HTTP 500".into())));
    let mut controller = controller_with(&service);

    controller.start_session();
    settle(&mut controller);

    assert!(controller.ui.error.is_none());
    assert!(controller.ui.scatter.is_empty());
}

#[test]
fn scatter_dataset_becomes_coloured_series() {
    let service = FakeService::new();
    service.set_scatter(Ok(ScatterDataset {
        data: vec![
            ScatterPoint {
                x: 0.0,
                y: 1.0,
                label: "dog".into(),
            },
            ScatterPoint {
                x: 2.0,
                y: -1.0,
                label: "siren".into(),
            },
        ],
        labels: vec!["dog".into(), "siren".into()],
    }));
    let mut controller = controller_with(&service);

    controller.start_session();
    settle(&mut controller);

    let series = &controller.ui.scatter.series;
    assert_eq!(series.len(), 2);
    assert_eq!(series[1].label, "siren");
    assert_eq!(series[1].points, vec![[2.0, -1.0]]);
    assert!(controller.ui.scatter.bounds.is_some());
}
