#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;

    /// In-process stand-in for the BFF, keyed by a unique fake origin.
    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        received: Vec<String>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        responses: Vec<MockResponse>,
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner::default())),
                base: format!("http://mock-{}.test", id),
            }
        }

        /// Registers this server and returns `<origin><path>`.
        pub fn url(&self, path: &str) -> String {
            register_mock(self.base.clone(), Arc::new(self.clone()));
            format!("{}{}", self.base, path)
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let route = Route {
                method: when.method.unwrap_or(GET),
                path: when.path.unwrap_or_else(|| "/".into()),
                query: when.query,
                responses: if then.sequence.is_empty() {
                    vec![then.single()]
                } else {
                    then.sequence
                },
            };
            if let Ok(mut inner) = self.inner.lock() {
                inner.routes.push(route);
            }
        }

        /// `"METHOD /path?query"` for every request received, in order.
        pub fn received(&self) -> Vec<String> {
            self.inner
                .lock()
                .map(|inner| inner.received.clone())
                .unwrap_or_default()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            let prefix = format!("{} {}", method, path);
            self.received()
                .iter()
                .filter(|line| {
                    line.as_str() == prefix || line.starts_with(&format!("{}?", prefix))
                })
                .count()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let url = request.url();
            let path = url.path();
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();

            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::unknown("mock lock"))?;
            let line = match url.query() {
                Some(q) => format!("{} {}?{}", method, path, q),
                None => format!("{} {}", method, path),
            };
            inner.received.push(line);

            let route = inner.routes.iter_mut().rev().find(|route| {
                route.method == *method
                    && route.path == path
                    && route.query.iter().all(|expected| pairs.contains(expected))
            });
            let route = route
                .ok_or_else(|| ApiError::unknown(format!("No mock for {} {}", method, path)))?;

            // Sequenced responses are consumed in order; the last one repeats.
            if route.responses.len() > 1 {
                Ok(route.responses.remove(0))
            } else {
                route
                    .responses
                    .first()
                    .cloned()
                    .ok_or_else(|| ApiError::unknown("mock has no response"))
            }
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
        query: Vec<(String, String)>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }

        pub fn query_param(&mut self, key: &str, value: &str) -> &mut Self {
            self.query.push((key.to_string(), value.to_string()));
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        text: Option<String>,
        sequence: Vec<MockResponse>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, text: &str) -> &mut Self {
            self.text = Some(text.to_string());
            self
        }

        /// Successive 200 JSON bodies for repeated calls.
        pub fn json_sequence(&mut self, bodies: Vec<Value>) -> &mut Self {
            self.sequence = bodies
                .into_iter()
                .map(|body| MockResponse::json(200, body))
                .collect();
            self
        }

        fn single(&self) -> MockResponse {
            let status = self.status.unwrap_or(200);
            match (&self.body, &self.text) {
                (Some(body), _) => MockResponse::json(status, body.clone()),
                (None, Some(text)) => MockResponse::text(status, text.clone()),
                (None, None) => MockResponse::text(status, ""),
            }
        }
    }
}
