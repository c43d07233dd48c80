use crate::app_context;
use crate::cli::tests::fake_args;
use crate::cli::Args;
use crate::http::router;
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    test_server_with_args(fake_args())
}

pub fn test_server_with_args(args: Args) -> TestServer {
    let app_context = app_context::init(&args);
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}
