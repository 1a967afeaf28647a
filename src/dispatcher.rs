//! Parallel fan-out of one prompt to many `provider:model` entries
//!
//! Each dispatch gets its own semaphore. Every resolvable entry becomes a
//! spawned task that holds one permit while it talks to its vendor; the
//! coordinating task waits for all of them and returns results in request
//! order. A failing or panicking task only affects its own entry. Dropping
//! a dispatch before it finishes aborts the tasks it spawned.

use crate::config::ServerConfig;
use crate::core_types::{
    CompletionRequest, DispatchReport, GenerationRequest, GenerationResult, ProviderAdapter,
    ProviderModelId,
};
use crate::error::{LlmError, LlmResult};
use crate::generation::{self, GenerationContext};
use crate::logging::{log_error, log_info, log_warn};
use crate::preview::PreviewRenderer;
use crate::prompts::PLANNING_SYSTEM_PROMPT;
use crate::providers::ProviderRegistry;
use chrono::Utc;
use futures_util::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::Instrument;
use uuid::Uuid;

/// Default number of concurrent upstream calls per dispatch
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 5;

/// Aborts the spawned units of one dispatch when dropped.
struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

/// One resolved entry waiting to be spawned.
struct Unit {
    model_id: ProviderModelId,
    adapter: Arc<dyn ProviderAdapter>,
    frame_id: String,
}

/// Fans generation requests out to the registered providers
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ProviderRegistry>,
    renderer: PreviewRenderer,
    concurrency_limit: usize,
    planner_model: String,
}

impl Dispatcher {
    pub fn new(registry: Arc<ProviderRegistry>, renderer: PreviewRenderer) -> Self {
        Self {
            registry,
            renderer,
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
            planner_model: ServerConfig::default().planner_model,
        }
    }

    /// Dispatcher configured from the server settings.
    pub fn from_config(registry: Arc<ProviderRegistry>, config: &ServerConfig) -> Self {
        Self::new(registry, PreviewRenderer::new(&config.preview_base_url))
            .with_concurrency_limit(config.concurrency_limit)
            .with_planner_model(&config.planner_model)
    }

    /// Permits per dispatch; values below 1 are raised to 1.
    pub fn with_concurrency_limit(mut self, limit: usize) -> Self {
        self.concurrency_limit = limit.max(1);
        self
    }

    pub fn with_planner_model(mut self, planner_model: impl Into<String>) -> Self {
        self.planner_model = planner_model.into();
        self
    }

    pub fn concurrency_limit(&self) -> usize {
        self.concurrency_limit
    }

    /// Run `request` against every resolvable model and wait for all of them.
    ///
    /// Never fails: unresolvable entries are logged and skipped, failed calls
    /// come back as failed results.
    pub async fn dispatch_all(&self, request: &GenerationRequest) -> DispatchReport {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("dispatch", request_id = %request_id);
        self.dispatch_inner(request_id, request).instrument(span).await
    }

    async fn dispatch_inner(
        &self,
        request_id: Uuid,
        request: &GenerationRequest,
    ) -> DispatchReport {
        let started = Utc::now();
        log_info!(
            models = ?request.models,
            prompt_type = ?request.prompt_type,
            use_planning = request.use_planning,
            "Received generation request"
        );

        let plan = if request.use_planning {
            self.plan(request).await
        } else {
            None
        };
        let system_prompt = match &plan {
            Some(plan) => format!("{}\n\nImplementation plan:\n{plan}", request.system_prompt),
            None => request.system_prompt.clone(),
        };

        let units = self.resolve_units(&request.models);
        let semaphore = Arc::new(Semaphore::new(self.concurrency_limit));
        let prompt: Arc<str> = Arc::from(request.prompt.as_str());
        let system_prompt: Arc<str> = Arc::from(system_prompt);

        let handles: Vec<_> = units
            .iter()
            .map(|unit| {
                let semaphore = Arc::clone(&semaphore);
                let adapter = Arc::clone(&unit.adapter);
                let model_id = unit.model_id.clone();
                let frame_id = unit.frame_id.clone();
                let renderer = self.renderer.clone();
                let prompt = Arc::clone(&prompt);
                let system_prompt = Arc::clone(&system_prompt);
                let prompt_type = request.prompt_type;

                tokio::spawn(
                    async move {
                        // Closing is never called, so acquire only fails if it is.
                        let _permit = match semaphore.acquire_owned().await {
                            Ok(permit) => permit,
                            Err(e) => {
                                return internal_failure(
                                    &model_id,
                                    adapter.display_name(),
                                    frame_id,
                                    format!("Concurrency gate closed: {e}"),
                                    &renderer,
                                )
                            }
                        };
                        let ctx = GenerationContext {
                            prompt: &prompt,
                            system_prompt: &system_prompt,
                            prompt_type,
                            renderer: &renderer,
                        };
                        generation::generate(adapter.as_ref(), &model_id, frame_id, ctx).await
                    }
                    .in_current_span(),
                )
            })
            .collect();

        // Dropping this future (client gone) aborts every unit still running.
        let _abort_on_drop = AbortOnDrop(handles.iter().map(JoinHandle::abort_handle).collect());
        let joined = join_all(handles).await;

        let results: Vec<GenerationResult> = units
            .iter()
            .zip(joined)
            .map(|(unit, joined)| match joined {
                Ok(result) => result,
                Err(e) => {
                    log_error!(
                        model = %unit.model_id,
                        error = %e,
                        "Generation task aborted"
                    );
                    internal_failure(
                        &unit.model_id,
                        unit.adapter.display_name(),
                        unit.frame_id.clone(),
                        format!("Generation task failed: {e}"),
                        &self.renderer,
                    )
                }
            })
            .collect();

        log_info!(
            requested = request.models.len(),
            completed = results.len(),
            succeeded = results.iter().filter(|r| r.succeeded()).count(),
            elapsed_ms = (Utc::now() - started).num_milliseconds(),
            "Dispatch finished"
        );

        DispatchReport {
            request_id,
            plan,
            results,
        }
    }

    /// Resolve entries in order, skipping invalid ids and unknown providers.
    fn resolve_units(&self, models: &[String]) -> Vec<Unit> {
        models
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let resolved = ProviderModelId::parse(raw).and_then(|model_id| {
                    let adapter = self.registry.resolve(model_id.provider())?;
                    Ok((model_id, adapter))
                });
                let (model_id, adapter) = match resolved {
                    Ok(resolved) => resolved,
                    Err(e) => {
                        log_error!(model = %raw, error = %e, "Skipping unresolvable model");
                        return None;
                    }
                };
                log_info!(model = %model_id, "Preparing task");
                Some(Unit {
                    frame_id: model_id.frame_id(index),
                    model_id,
                    adapter,
                })
            })
            .collect()
    }

    /// Ask the planner model for an implementation plan.
    async fn plan(&self, request: &GenerationRequest) -> Option<String> {
        match self.request_plan(request).await {
            Ok(plan) => {
                log_info!(
                    planner = %self.planner_model,
                    plan_length = plan.len(),
                    "Implementation plan created"
                );
                Some(plan)
            }
            Err(e) => {
                log_warn!(
                    planner = %self.planner_model,
                    error = %e,
                    "Planning failed, continuing without a plan"
                );
                None
            }
        }
    }

    async fn request_plan(&self, request: &GenerationRequest) -> LlmResult<String> {
        let model_id = ProviderModelId::parse(&self.planner_model)?;
        let adapter = self.registry.resolve(model_id.provider())?;
        adapter
            .complete(CompletionRequest::new(
                model_id.model(),
                PLANNING_SYSTEM_PROMPT,
                request.prompt_type.planning_message(&request.prompt),
            ))
            .await
    }
}

fn internal_failure(
    model_id: &ProviderModelId,
    display_name: &str,
    frame_id: String,
    message: String,
    renderer: &PreviewRenderer,
) -> GenerationResult {
    let err = LlmError::internal(message);
    let (outcome, preview) = generation::failure(display_name, &err, renderer);
    let now = Utc::now();
    GenerationResult {
        model_id: model_id.clone(),
        outcome,
        preview,
        frame_id,
        started_at: now,
        finished_at: now,
    }
}
