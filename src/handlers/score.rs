use actix_web::{get, web, HttpResponse, Responder};
use crate::models::{AppState, Strategy, TopQuery, TopResponse};
use crate::services::pipeline::{Pipeline, DEFAULT_TOP};
use log::{info, warn};

#[get("/top")]
pub async fn top_words(data: web::Data<AppState>, query: web::Query<TopQuery>) -> impl Responder {
    let count = query.count.unwrap_or(DEFAULT_TOP);
    let strategy = if query.parallel.unwrap_or(false) {
        Strategy::Parallel
    } else {
        Strategy::Sequential
    };

    let corpus = data.corpus.clone();
    let dictionary = data.dictionary.clone();
    let config = data.config.clone();

    let result = tokio::task::spawn_blocking(move || {
        Pipeline::new(&*dictionary, &*config)
            .strategy(strategy)
            .top(&corpus, count)
    })
    .await;

    match result {
        Ok(groups) => {
            info!("Served top {} score groups ({:?})", groups.len(), strategy);
            HttpResponse::Ok().json(TopResponse { strategy, groups })
        }
        Err(e) => {
            warn!("Scoring task failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tables::ScoringConfig;
    use crate::services::word_loader::corpus_from_text;
    use actix_web::{test, App};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn state() -> web::Data<AppState> {
        let dictionary: HashSet<String> = ["a", "cat", "dog", "tag", "quiz"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        web::Data::new(AppState {
            corpus: Arc::new(corpus_from_text("A cat, a dog; a tag. Quiz the cat!")),
            dictionary: Arc::new(dictionary),
            config: Arc::new(ScoringConfig::default()),
        })
    }

    #[actix_web::test]
    async fn test_top_defaults_to_three_groups() {
        let app = test::init_service(App::new().app_data(state()).service(top_words)).await;
        let req = test::TestRequest::get().uri("/top").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["strategy"], "sequential");
        let groups = body["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0]["score"], 64);
        assert_eq!(groups[0]["words"], serde_json::json!(["quiz"]));
        assert_eq!(groups[1]["score"], 16);
        assert_eq!(groups[1]["words"], serde_json::json!(["cat", "cat"]));
        assert_eq!(groups[2]["score"], 14);
    }

    #[actix_web::test]
    async fn test_top_parallel_with_count() {
        let app = test::init_service(App::new().app_data(state()).service(top_words)).await;
        let req = test::TestRequest::get()
            .uri("/top?count=10&parallel=true")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["strategy"], "parallel");
        let scores: Vec<u64> = body["groups"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["score"].as_u64().unwrap())
            .collect();
        assert_eq!(scores, vec![64, 16, 14, 12, 4]);
    }
}
