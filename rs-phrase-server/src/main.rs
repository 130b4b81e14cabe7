use actix_cors::Cors;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use rs_phrase_core::io::split_words;
use rs_phrase_core::ngram::config::{NgramConfig, DEFAULT_BUCKET_COUNT, DEFAULT_NGRAM_SIZE};
use rs_phrase_core::ngram::record::Record;
use rs_phrase_core::NgramList;

/// HTTP front-end counting the n-word phrases of posted text.
#[derive(Parser, Debug)]
#[command(name = "rs-phrase-server", version, about)]
struct Args {
	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to listen on
	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Phrase size used when a request does not set `n`
	#[arg(short = 'n', long = "ngram-size", default_value_t = DEFAULT_NGRAM_SIZE)]
	ngram_size: usize,

	/// Bucket count used when a request does not set `buckets`
	#[arg(long, default_value_t = DEFAULT_BUCKET_COUNT)]
	buckets: usize,

	/// Maximum accepted body size, in bytes
	#[arg(long, default_value_t = 4 * 1024 * 1024)]
	max_body: usize,
}

/// Response format for `/v1/ngrams`.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Format {
	#[default]
	Text,
	Json,
}

/// Query parameters for the `/v1/ngrams` endpoint
#[derive(Deserialize)]
struct NgramParams {
	n: Option<usize>,
	buckets: Option<usize>,
	top: Option<usize>,
	#[serde(default)]
	format: Format,
}

impl NgramParams {
	/// Overrides the server defaults with the request's values.
	fn config(&self, defaults: &NgramConfig) -> NgramConfig {
		NgramConfig {
			ngram_size: self.n.unwrap_or(defaults.ngram_size),
			bucket_count: self.buckets.unwrap_or(defaults.bucket_count),
		}
	}
}

#[derive(Serialize)]
struct NgramResponse<'a> {
	ngram_size: usize,
	total: usize,
	records: &'a [&'a Record],
}

/// HTTP POST endpoint `/v1/ngrams`
///
/// Counts the phrases of the UTF-8 request body and returns them ranked
/// by descending count, as the text report or as JSON.
/// Each request builds its own table; nothing is shared between workers.
#[post("/v1/ngrams")]
async fn post_ngrams(defaults: web::Data<NgramConfig>, query: web::Query<NgramParams>, body: web::Bytes) -> impl Responder {
	let text = match std::str::from_utf8(&body) {
		Ok(text) => text,
		Err(_) => return HttpResponse::BadRequest().body("Body must be UTF-8 text"),
	};

	let words = split_words(text);
	let list = match NgramList::with_config(query.config(&defaults), &words) {
		Ok(list) => list,
		Err(e) => {
			warn!("rejected request: {}", e);
			return HttpResponse::BadRequest().body(e.to_string());
		}
	};
	info!("counted {} phrases from {} words", list.table().total_count(), words.len());

	match query.format {
		Format::Text => {
			let mut report = String::new();
			match list.write_report(&mut report, query.top) {
				Ok(()) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(report),
				Err(_) => HttpResponse::InternalServerError().body("Failed to render report"),
			}
		}
		Format::Json => {
			let ranked = list.rank();
			let records = match query.top {
				Some(k) => ranked.top(k),
				None => ranked.as_slice(),
			};
			HttpResponse::Ok().json(NgramResponse {
				ngram_size: list.ngram_size(),
				total: list.table().total_count(),
				records,
			})
		}
	}
}

#[get("/v1/health")]
async fn get_health() -> impl Responder {
	HttpResponse::Ok().body("ok")
}

/// Main entry point for the server.
///
/// Reads the command line, then starts an Actix-web HTTP server
/// exposing the counting and health endpoints.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = Args::parse();
	let defaults = NgramConfig {
		ngram_size: args.ngram_size,
		bucket_count: args.buckets,
	};
	if let Err(e) = defaults.validate() {
		return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
	}
	info!("listening on {}:{} with {:?}", args.host, args.port, defaults);

	let defaults = web::Data::new(defaults);
	let max_body = args.max_body;

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET", "POST"]))
			.app_data(defaults.clone())
			.app_data(web::PayloadConfig::new(max_body))
			.service(post_ngrams)
			.service(get_health)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}
