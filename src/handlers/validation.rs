use actix_web::{get, web, HttpResponse, Responder};
use crate::models::{AppState, Word, WordResponse};
use crate::services::histogram::LetterHistogram;
use crate::services::scoring::{blanks_needed, placement_score, MAX_BLANKS};
use log::{info, warn};

fn parse_or_reject(word: &str) -> Result<Word, HttpResponse> {
    Word::parse(&word.to_ascii_lowercase()).map_err(|e| {
        warn!("Rejected word query {:?}: {}", word, e);
        HttpResponse::BadRequest().body(e.to_string())
    })
}

fn check_word_logic(data: &web::Data<AppState>, word: &str) -> HttpResponse {
    let word = match parse_or_reject(word) {
        Ok(w) => w,
        Err(response) => return response,
    };

    let in_dictionary = data.dictionary.contains(word.as_str());
    let histogram = LetterHistogram::of(&word);
    let blanks = blanks_needed(&histogram, &data.config);
    let playable = blanks <= MAX_BLANKS;
    let score =
        (in_dictionary && playable).then(|| placement_score(&word, &histogram, &data.config));

    info!(
        "Word queried: {} (in dictionary: {}, blanks: {}, score: {:?})",
        word, in_dictionary, blanks, score
    );

    HttpResponse::Ok().json(WordResponse {
        word,
        in_dictionary,
        blanks_needed: blanks,
        playable,
        score,
    })
}

fn validate_word_logic(data: &web::Data<AppState>, word: &str) -> HttpResponse {
    let word = match parse_or_reject(word) {
        Ok(w) => w,
        Err(response) => return response,
    };

    let playable = blanks_needed(&LetterHistogram::of(&word), &data.config) <= MAX_BLANKS;
    if playable && data.dictionary.contains(word.as_str()) {
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

#[get("/word/{word}")]
pub async fn check_word(data: web::Data<AppState>, word: web::Path<String>) -> impl Responder {
    check_word_logic(&data, &word.into_inner())
}

#[get("/validate/{word}")]
pub async fn validate_word(data: web::Data<AppState>, word: web::Path<String>) -> impl Responder {
    validate_word_logic(&data, &word.into_inner())
}
