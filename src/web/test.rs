use std::sync::Arc;

use poem::test::TestClient;
use poem::{Endpoint, EndpointExt};

use crate::predictor::Predictor;
use crate::submit::SubmitHandler;
use crate::web::create_standalone_app;

pub fn create_test_client(predictor: Arc<dyn Predictor>) -> TestClient<impl Endpoint> {
    TestClient::new(create_standalone_app().data(SubmitHandler::new(predictor)))
}
