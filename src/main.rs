use std::sync::Arc;

use promenade::config::Config;
use promenade::engine::RouteResolver;
use promenade::external::OsrmClient;
use promenade::server::serve;
use promenade::store::LocationStore;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().unwrap();

    let store = Arc::new(LocationStore::load(&config.dataset_path).await.unwrap());

    let service = OsrmClient::new(&config).unwrap();
    let resolver = RouteResolver::new(Arc::new(service));

    serve(&config, store, resolver).await;
}
