use std::path::PathBuf;
use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use log::info;
use serde::Deserialize;

use markov_chain_core::io::{get_filename, list_files, normalize_folder};
use markov_chain_core::{ChainError, GenerationInput, Generator, Order, StartSeed};

const DATA_FOLDER: &str = "./data";
const CORPUS_EXTENSION: &str = "txt";

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	max_words: Option<usize>,
	start: Option<String> // -> any, capitalized or custom:<words>
}

#[derive(Deserialize)]
struct CorpusQuery {
	name: Option<String>,
	order: Option<usize>
}

/// Corpus currently served, with its chain table.
struct LoadedCorpus {
	name: String,
	generator: Generator
}

/// The lock only guards swapping the corpus; walks run on a clone of the
/// generator, outside of it.
struct SharedData {
	data_folder: PathBuf,
	corpus: RwLock<Option<LoadedCorpus>>
}

impl SharedData {
	fn new(data_folder: PathBuf) -> Self {
		Self { data_folder, corpus: RwLock::new(None) }
	}
}

impl GenerateParams {
	/// Determines the starting state strategy for the walk.
	fn start_seed(&self) -> Result<StartSeed, String> {
		match &self.start {
			None => Ok(StartSeed::Any),
			Some(s) if s.to_lowercase() == "any" => Ok(StartSeed::Any),
			Some(s) if s.to_lowercase() == "capitalized" => Ok(StartSeed::Capitalized),
			Some(s) if s.to_lowercase().starts_with("custom:") => {
				let value = &s["custom:".len()..];
				if value.trim().is_empty() {
					Err("Custom start cannot be empty".into())
				} else {
					Ok(StartSeed::Custom(value.to_owned()))
				}
			}
			Some(_) => Err("Start must be 'any', 'capitalized' or start with 'custom:'".into()),
		}
	}

	fn generation_input(&self) -> Result<GenerationInput, String> {
		GenerationInput::new()
			.with_start(self.start_seed()?)
			.with_max_words(self.max_words)
			.map_err(|e| e.to_string())
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Walks the chain table of the loaded corpus and returns the generated text.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let generator = match data.corpus.read() {
		Ok(corpus) => match corpus.as_ref() {
			Some(loaded) => loaded.generator.clone(),
			None => return HttpResponse::Conflict().body("No corpus loaded")
		},
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};

	match generator.generate(&input) {
		Ok(text) => HttpResponse::Ok().body(text),
		Err(e @ (ChainError::NoValidStart | ChainError::InvalidSeed { .. })) => HttpResponse::BadRequest().body(e.to_string()),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// Names of the corpora available in the data folder, one per line.
#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<SharedData>) -> impl Responder {
	let names = list_files(&data.data_folder, CORPUS_EXTENSION)
		.and_then(|files| files.iter().map(get_filename).collect::<std::io::Result<Vec<_>>>());
	match names {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora")
	}
}

#[get("/v1/loaded_corpus")]
async fn get_loaded_corpus(data: web::Data<SharedData>) -> impl Responder {
	let corpus = match data.corpus.read() {
		Ok(c) => c,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};
	match corpus.as_ref() {
		Some(loaded) => {
			let table = loaded.generator.table();
			HttpResponse::Ok().body(format!(
				"{}\n{}\n{} states\n{} transitions",
				loaded.name,
				table.order(),
				table.len(),
				table.transition_count()
			))
		}
		None => HttpResponse::Conflict().body("No corpus loaded")
	}
}

#[put("/v1/load_corpus")]
async fn put_corpus(data: web::Data<SharedData>, query: web::Query<CorpusQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};
	if name.contains(['/', '\\']) || name.contains("..") {
		return HttpResponse::BadRequest().body("Invalid corpus name");
	}
	let order = match Order::try_from(query.order.unwrap_or(2)) {
		Ok(order) => order,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string())
	};

	// Build outside of the lock; only the swap is exclusive
	let path = data.data_folder.join(format!("{}.{}", name, CORPUS_EXTENSION));
	let generator = match Generator::from_file(&path, order) {
		Ok(g) => g,
		Err(ChainError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
			return HttpResponse::NotFound().body(format!("Corpus {} not found", name))
		}
		Err(e @ ChainError::InsufficientInput { .. }) => return HttpResponse::BadRequest().body(e.to_string()),
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}"))
	};
	info!("loaded {} corpus {}: {} states", order, name, generator.table().len());

	match data.corpus.write() {
		Ok(mut corpus) => {
			*corpus = Some(LoadedCorpus { name: name.to_owned(), generator });
			HttpResponse::Ok().body("Corpus loaded successfully")
		}
		Err(_) => HttpResponse::InternalServerError().body("Corpus lock failed"),
	}
}

/// Main entry point for the server.
///
/// Starts with no corpus loaded; `PUT /v1/load_corpus` selects one from
/// the `./data` folder.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Request logs go through `env_logger` (`RUST_LOG=info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = web::Data::new(SharedData::new(normalize_folder(DATA_FOLDER)));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.wrap(Logger::default())
			.app_data(shared_data.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(put_corpus)
			.service(get_loaded_corpus)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
