//! Device inventory traversal
//!
//! Lists every workspace, then walks them one by one: devices first, then
//! location, then floor. Each device becomes one [`ExportRecord`]. The sink
//! sees the complete record list once at the end, or nothing at all if any
//! request fails for good.

use indicatif::ProgressBar;
use log::{debug, error, info};

use crate::error::Result;
use crate::output::ExportSink;
use crate::ui::{clear_spinner, create_progress_bar, create_spinner, finish_progress, finish_spinner};
use crate::webex::{WebexClient, WebexResource, Workspace};

use super::record::ExportRecord;
use super::resolver::EnrichmentResolver;

/// Where a pipeline run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    ListingWorkspaces,
    /// Resolving devices, location and floor of workspace `index` (0-based)
    EnrichingWorkspace { index: usize, total: usize },
    EmittingRecords,
    Done,
    Failed,
}

/// Drives one inventory run against a [`WebexClient`]
pub struct InventoryPipeline<'a> {
    client: &'a WebexClient,
    resolver: EnrichmentResolver<'a>,
    quiet: bool,
    state: PipelineState,
}

impl<'a> InventoryPipeline<'a> {
    pub fn new(client: &'a WebexClient) -> Self {
        Self {
            client,
            resolver: EnrichmentResolver::new(client),
            quiet: false,
            state: PipelineState::Start,
        }
    }

    /// Suppress spinner and progress bar
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn transition(&mut self, next: PipelineState) {
        debug!("Pipeline state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Run the traversal and hand the records to `sink`
    ///
    /// Returns the sink's description of what it produced.
    pub async fn run<S>(&mut self, sink: &S) -> Result<String>
    where
        S: ExportSink + ?Sized,
    {
        let outcome = match self.collect_records().await {
            Ok(records) => {
                info!("Exporting {} device records", records.len());
                sink.export(&records)
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(artifact) => {
                self.transition(PipelineState::Done);
                info!("Inventory export written to {}", artifact);
                Ok(artifact)
            }
            Err(e) => {
                self.transition(PipelineState::Failed);
                error!("Inventory run failed, nothing exported: {}", e);
                Err(e)
            }
        }
    }

    async fn collect_records(&mut self) -> Result<Vec<ExportRecord>> {
        self.transition(PipelineState::ListingWorkspaces);

        let spinner = create_spinner("Listing workspaces...", self.quiet);
        let workspaces = match self.client.list_workspaces().await {
            Ok(workspaces) => {
                finish_spinner(spinner, &format!("Found {} workspaces", workspaces.len()));
                workspaces
            }
            Err(e) => {
                clear_spinner(spinner);
                return Err(e);
            }
        };
        info!("Enriching {} workspaces", workspaces.len());

        let progress = create_progress_bar(workspaces.len() as u64, self.quiet);
        let result = self.enrich_all(&workspaces, progress.as_ref()).await;
        finish_progress(progress, result.is_ok());
        result
    }

    async fn enrich_all(
        &mut self,
        workspaces: &[Workspace],
        progress: Option<&ProgressBar>,
    ) -> Result<Vec<ExportRecord>> {
        let total = workspaces.len();
        let mut records = Vec::new();

        for (index, workspace) in workspaces.iter().enumerate() {
            self.transition(PipelineState::EnrichingWorkspace { index, total });
            debug!(
                "Workspace {}/{}: {}",
                index + 1,
                total,
                workspace.label()
            );

            let devices = self.resolver.devices_for(&workspace.id).await?;
            let enrichment = self.resolver.enrich(workspace).await?;

            self.transition(PipelineState::EmittingRecords);
            records.extend(
                devices
                    .iter()
                    .map(|device| ExportRecord::new(device, workspace, &enrichment)),
            );

            if let Some(bar) = progress {
                bar.inc(1);
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WxError;
    use std::sync::Mutex;
    use wiremock::matchers::{method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Sink that remembers every batch it was handed
    #[derive(Default)]
    struct RecordingSink {
        batches: Mutex<Vec<Vec<ExportRecord>>>,
    }

    impl RecordingSink {
        fn batches(&self) -> Vec<Vec<ExportRecord>> {
            self.batches.lock().unwrap().clone()
        }
    }

    impl ExportSink for RecordingSink {
        fn export(&self, records: &[ExportRecord]) -> Result<String> {
            self.batches.lock().unwrap().push(records.to_vec());
            Ok("memory".to_string())
        }
    }

    struct FailingSink;

    impl ExportSink for FailingSink {
        fn export(&self, _records: &[ExportRecord]) -> Result<String> {
            Err(WxError::Export("disk full".to_string()))
        }
    }

    async fn mount_workspaces(server: &MockServer, items: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/workspaces"))
            .and(query_param("start", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": items
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn mount_devices(server: &MockServer, workspace_id: &str, items: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/devices"))
            .and(query_param("workspaceId", workspace_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": items
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    fn hq_location() -> serde_json::Value {
        serde_json::json!({
            "id": "loc-1",
            "name": "HQ",
            "address": {
                "address1": "1 Main St",
                "city": "",
                "state": "CA",
                "postalCode": "",
                "country": "US"
            }
        })
    }

    #[tokio::test]
    async fn test_end_to_end_records_and_lookup_counts() {
        let mock_server = MockServer::start().await;
        let client = WebexClient::test_client(&mock_server.uri());

        mount_workspaces(
            &mock_server,
            serde_json::json!([
                {"id": "ws-1", "displayName": "Boardroom", "locationId": "loc-1", "floorId": "fl-2"},
                {"id": "ws-2", "displayName": "Lobby", "locationId": "loc-1"}
            ]),
        )
        .await;
        mount_devices(
            &mock_server,
            "ws-1",
            serde_json::json!([
                {"id": "dev-1", "displayName": "Room Bar", "workspaceId": "ws-1"},
                {"id": "dev-2", "displayName": "Navigator", "workspaceId": "ws-1"}
            ]),
        )
        .await;
        mount_devices(
            &mock_server,
            "ws-2",
            serde_json::json!([{"id": "dev-3", "displayName": "Desk", "workspaceId": "ws-2"}]),
        )
        .await;

        // Shared location is looked up once per workspace, not once per id
        Mock::given(method("GET"))
            .and(path("/locations/loc-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(hq_location()))
            .expect(2)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/locations/loc-1/floors/fl-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "fl-2",
                "locationId": "loc-1",
                "floorNumber": 2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sink = RecordingSink::default();
        let mut pipeline = InventoryPipeline::new(&client).with_quiet(true);
        let artifact = pipeline.run(&sink).await.unwrap();

        assert_eq!(artifact, "memory");
        assert_eq!(pipeline.state(), PipelineState::Done);

        let batches = sink.batches();
        assert_eq!(batches.len(), 1);
        let records = &batches[0];
        assert_eq!(records.len(), 3);

        assert_eq!(
            records[0].values(),
            ["dev-1", "Room Bar", "ws-1", "Boardroom", "HQ", "1 Main St, CA, US", "2"]
        );
        assert_eq!(records[1].device_id, "dev-2");
        assert_eq!(records[1].floor_number, "2");
        assert_eq!(
            records[2].values(),
            ["dev-3", "Desk", "ws-2", "Lobby", "HQ", "1 Main St, CA, US", ""]
        );
    }

    #[tokio::test]
    async fn test_null_names_export_as_empty_cells() {
        let mock_server = MockServer::start().await;
        let client = WebexClient::test_client(&mock_server.uri());

        mount_workspaces(
            &mock_server,
            serde_json::json!([{"id": "ws-1", "displayName": null, "locationId": "loc-1"}]),
        )
        .await;
        mount_devices(
            &mock_server,
            "ws-1",
            serde_json::json!([{"id": "dev-1", "displayName": null, "workspaceId": "ws-1"}]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/locations/loc-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "loc-1",
                "name": null
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sink = RecordingSink::default();
        let mut pipeline = InventoryPipeline::new(&client).with_quiet(true);
        pipeline.run(&sink).await.unwrap();

        assert_eq!(pipeline.state(), PipelineState::Done);
        assert_eq!(
            sink.batches()[0][0].values(),
            ["dev-1", "", "ws-1", "", "", "", ""]
        );
    }

    #[tokio::test]
    async fn test_floor_without_location_yields_empty_fields() {
        let mock_server = MockServer::start().await;
        let client = WebexClient::test_client(&mock_server.uri());

        mount_workspaces(
            &mock_server,
            serde_json::json!([{"id": "ws-1", "displayName": "Pod", "floorId": "fl-1"}]),
        )
        .await;
        mount_devices(
            &mock_server,
            "ws-1",
            serde_json::json!([{"id": "dev-1", "displayName": "Board"}]),
        )
        .await;
        Mock::given(path_regex("^/locations"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let sink = RecordingSink::default();
        let mut pipeline = InventoryPipeline::new(&client).with_quiet(true);
        pipeline.run(&sink).await.unwrap();

        let record = &sink.batches()[0][0];
        assert_eq!(record.location_name, "");
        assert_eq!(record.location_address, "");
        assert_eq!(record.floor_number, "");
    }

    #[tokio::test]
    async fn test_workspace_without_devices_still_resolves_location() {
        let mock_server = MockServer::start().await;
        let client = WebexClient::test_client(&mock_server.uri());

        mount_workspaces(
            &mock_server,
            serde_json::json!([
                {"id": "ws-empty", "displayName": "Storage", "locationId": "loc-1", "floorId": "fl-1"}
            ]),
        )
        .await;
        mount_devices(&mock_server, "ws-empty", serde_json::json!([])).await;
        Mock::given(method("GET"))
            .and(path("/locations/loc-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(hq_location()))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/locations/loc-1/floors/fl-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "fl-1",
                "floorNumber": 1
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sink = RecordingSink::default();
        let mut pipeline = InventoryPipeline::new(&client).with_quiet(true);
        pipeline.run(&sink).await.unwrap();

        let batches = sink.batches();
        assert_eq!(batches.len(), 1);
        assert!(batches[0].is_empty());
    }

    #[tokio::test]
    async fn test_no_workspaces_exports_empty_batch() {
        let mock_server = MockServer::start().await;
        let client = WebexClient::test_client(&mock_server.uri());
        mount_workspaces(&mock_server, serde_json::json!([])).await;

        let sink = RecordingSink::default();
        let mut pipeline = InventoryPipeline::new(&client).with_quiet(true);
        pipeline.run(&sink).await.unwrap();

        assert_eq!(sink.batches(), vec![Vec::<ExportRecord>::new()]);
        assert_eq!(pipeline.state(), PipelineState::Done);
    }

    #[tokio::test]
    async fn test_calls_are_made_in_workspace_order() {
        let mock_server = MockServer::start().await;
        let client = WebexClient::test_client(&mock_server.uri());

        mount_workspaces(
            &mock_server,
            serde_json::json!([
                {"id": "ws-b", "displayName": "B", "locationId": "loc-1"},
                {"id": "ws-a", "displayName": "A"}
            ]),
        )
        .await;
        mount_devices(&mock_server, "ws-b", serde_json::json!([])).await;
        mount_devices(&mock_server, "ws-a", serde_json::json!([])).await;
        Mock::given(method("GET"))
            .and(path("/locations/loc-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(hq_location()))
            .mount(&mock_server)
            .await;

        let sink = RecordingSink::default();
        let mut pipeline = InventoryPipeline::new(&client).with_quiet(true);
        pipeline.run(&sink).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        let trail: Vec<String> = requests
            .iter()
            .map(|r| match r.url.query() {
                Some(q) if r.url.path() == "/devices" => format!("/devices?{}", q),
                _ => r.url.path().to_string(),
            })
            .collect();
        assert_eq!(
            trail,
            vec![
                "/workspaces",
                "/devices?workspaceId=ws-b",
                "/locations/loc-1",
                "/devices?workspaceId=ws-a",
            ]
        );
    }

    #[tokio::test]
    async fn test_terminal_failure_skips_sink() {
        let mock_server = MockServer::start().await;
        let client = WebexClient::test_client_with(&mock_server.uri(), |p| p.with_max_retries(2));

        mount_workspaces(
            &mock_server,
            serde_json::json!([
                {"id": "ws-1", "displayName": "One"},
                {"id": "ws-2", "displayName": "Two"}
            ]),
        )
        .await;
        mount_devices(
            &mock_server,
            "ws-1",
            serde_json::json!([{"id": "dev-1", "displayName": "Board"}]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .and(query_param("workspaceId", "ws-2"))
            .respond_with(ResponseTemplate::new(502))
            .expect(2)
            .mount(&mock_server)
            .await;

        let sink = RecordingSink::default();
        let mut pipeline = InventoryPipeline::new(&client).with_quiet(true);
        let result = pipeline.run(&sink).await;

        assert!(matches!(result, Err(WxError::RetriesExhausted { .. })));
        assert_eq!(pipeline.state(), PipelineState::Failed);
        assert!(sink.batches().is_empty());
    }

    #[tokio::test]
    async fn test_listing_failure_skips_sink() {
        let mock_server = MockServer::start().await;
        let client = WebexClient::test_client_with(&mock_server.uri(), |p| p.with_max_retries(1));

        Mock::given(method("GET"))
            .and(path("/workspaces"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(path("/devices"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let sink = RecordingSink::default();
        let mut pipeline = InventoryPipeline::new(&client).with_quiet(true);
        assert!(pipeline.run(&sink).await.is_err());
        assert_eq!(pipeline.state(), PipelineState::Failed);
        assert!(sink.batches().is_empty());
    }

    #[tokio::test]
    async fn test_sink_failure_marks_run_failed() {
        let mock_server = MockServer::start().await;
        let client = WebexClient::test_client(&mock_server.uri());
        mount_workspaces(&mock_server, serde_json::json!([])).await;

        let mut pipeline = InventoryPipeline::new(&client).with_quiet(true);
        let result = pipeline.run(&FailingSink).await;

        assert!(matches!(result, Err(WxError::Export(_))));
        assert_eq!(pipeline.state(), PipelineState::Failed);
    }

    #[test]
    fn test_new_pipeline_starts_in_start_state() {
        let client = WebexClient::test_client("http://127.0.0.1:9");
        let pipeline = InventoryPipeline::new(&client);
        assert_eq!(pipeline.state(), PipelineState::Start);
    }
}
