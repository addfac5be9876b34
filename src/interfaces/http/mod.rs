use crate::application::SweepPipeline;
use crate::domain::error::AppError;
use crate::domain::pipeline::{
    ChartSelection, DedupeReport, FileDetails, FileOutcome, FillReport, PipelineConfig,
};
use crate::domain::upload::UploadedFile;
use crate::infrastructure::config::AppConfig;
use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub pipeline: SweepPipeline,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

/// One uploaded file as the UI ships it: filename plus base64 content
#[derive(Deserialize)]
pub struct FilePayload {
    pub name: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct ProcessRequest {
    pub files: Vec<FilePayload>,
    #[serde(default)]
    pub config: PipelineConfig,
}

#[derive(Serialize)]
pub struct ArtifactResponse {
    pub file_name: String,
    pub mime_type: String,
    /// Base64-encoded export bytes
    pub content: String,
}

/// Per-file result entry: either the stage reports or the error string
#[derive(Serialize)]
pub struct FileResult {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FileDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedupe: Option<DedupeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ArtifactResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_row_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileResult {
    fn success(outcome: FileOutcome) -> Self {
        let artifact = outcome.artifact.map(|a| ArtifactResponse {
            file_name: a.file_name,
            mime_type: a.mime_type,
            content: BASE64.encode(&a.bytes),
        });

        Self {
            file_name: outcome.details.name.clone(),
            details: Some(outcome.details),
            dedupe: outcome.dedupe,
            fill: outcome.fill,
            projected_columns: outcome.projected_columns,
            chart: outcome.chart,
            artifact,
            final_row_count: Some(outcome.final_row_count),
            error: None,
        }
    }

    fn failure(file_name: &str, err: AppError) -> Self {
        Self {
            file_name: file_name.to_string(),
            details: None,
            dedupe: None,
            fill: None,
            projected_columns: None,
            chart: None,
            artifact: None,
            final_row_count: None,
            error: Some(err.to_string()),
        }
    }
}

fn decode_file(payload: &FilePayload) -> Result<UploadedFile, AppError> {
    let bytes = BASE64.decode(payload.content.as_bytes()).map_err(|e| {
        AppError::ValidationError(format!("File {} is not valid base64: {}", payload.name, e))
    })?;
    Ok(UploadedFile::new(payload.name.clone(), bytes))
}

#[post("/preview")]
async fn preview(data: web::Data<HttpState>, req: web::Json<FilePayload>) -> impl Responder {
    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!("Previewing {}", req.name),
    );

    let file = match decode_file(&req) {
        Ok(file) => file,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };

    match data.pipeline.preview(&file) {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "HttpApi",
                &format!("Preview of {} failed: {}", req.name, e),
            );
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

#[post("/process")]
async fn process(data: web::Data<HttpState>, req: web::Json<ProcessRequest>) -> impl Responder {
    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!("Processing batch of {} file(s)", req.files.len()),
    );

    // An empty batch is the idle state, not an error
    let mut results = Vec::with_capacity(req.files.len());

    for payload in &req.files {
        let entry = match decode_file(payload) {
            Err(e) => FileResult::failure(&payload.name, e),
            Ok(file) => match data.pipeline.run(&file, &req.config) {
                Ok(outcome) => FileResult::success(outcome),
                Err(e) => {
                    add_log(
                        &data.logs,
                        "WARN",
                        "HttpApi",
                        &format!("Skipped {}: {}", payload.name, e),
                    );
                    FileResult::failure(&payload.name, e)
                }
            },
        };
        results.push(entry);
    }

    HttpResponse::Ok().json(results)
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap();
    HttpResponse::Ok().json(&*logs)
}

pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap();
    logs.push(entry.clone());
    if logs.len() > 100 {
        logs.remove(0);
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}

pub fn start_server(config: AppConfig) -> std::io::Result<Server> {
    let logs = Arc::new(Mutex::new(Vec::new()));
    let address = (config.host.clone(), config.port);
    let state = web::Data::new(HttpState {
        pipeline: SweepPipeline::new(config),
        logs,
    });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new().wrap(cors).app_data(state.clone()).service(
            web::scope("/api")
                .service(preview)
                .service(process)
                .service(get_logs),
        )
    })
    .bind(address)?
    .run();

    Ok(server)
}
