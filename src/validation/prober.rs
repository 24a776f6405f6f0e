use async_trait::async_trait;
use futures::{StreamExt, stream};
use reqwest::redirect::Policy;
use std::time::Instant;

use crate::core::constants::defaults;
use crate::core::error::Result;
use crate::core::types::ProbeStatus;
use crate::reporting::logging;
use crate::ui::progress::ProgressReporter;

/// Transport used to decide whether a single URL is reachable.
///
/// `true` means the request completed with any response at all; `false`
/// means it failed before a response arrived.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> bool;
}

/// Settings for the HTTP transport.
#[derive(Debug, Clone, Default)]
pub struct HttpProbeOptions {
    /// Send HEAD instead of GET
    pub use_head_requests: bool,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

/// Probe backed by a shared reqwest client.
///
/// No request timeout is set; a probe lasts as long as the client's
/// connection attempt does.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    use_head_requests: bool,
}

impl HttpProbe {
    pub fn new(options: &HttpProbeOptions) -> Result<Self> {
        let user_agent = options.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let client = reqwest::Client::builder()
            .redirect(Policy::limited(defaults::MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            use_head_requests: options.use_head_requests,
        })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, url: &str) -> bool {
        let request = if self.use_head_requests {
            self.client.head(url)
        } else {
            self.client.get(url)
        };

        match request.send().await {
            Ok(_) => {
                logging::log_url_result(url, true, None);
                true
            }
            Err(err) => {
                let description = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                logging::log_url_result(url, false, Some(&description));
                false
            }
        }
    }
}

/// Probes a whole probe set concurrently.
///
/// By default every probe is put in flight at once. `with_concurrency`
/// caps the number of probes in flight.
pub struct Prober<P> {
    probe: P,
    concurrency: Option<usize>,
}

impl<P: Probe> Prober<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            concurrency: None,
        }
    }

    pub fn with_concurrency(mut self, concurrency: Option<usize>) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// How many probes may be in flight for a set of `total` URLs.
    pub fn in_flight_limit(&self, total: usize) -> usize {
        match self.concurrency {
            Some(cap) => cap.max(1),
            None => total.max(1),
        }
    }

    /// Probe every URL and return one status per URL, in input order.
    ///
    /// Each completed probe writes only its own slot, so completion order
    /// never affects the result order.
    pub async fn probe_all(
        &self,
        urls: &[String],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Vec<ProbeStatus> {
        let mut results = vec![ProbeStatus::Unknown; urls.len()];
        if urls.is_empty() {
            return results;
        }

        let limit = self.in_flight_limit(urls.len());
        logging::log_probe_start(urls.len(), limit);

        if let Some(ref mut prog) = progress {
            prog.start_probing(urls.len());
        }

        let start_time = Instant::now();
        let mut probes = stream::iter(urls.iter().enumerate())
            .map(|(index, url)| {
                let probe = &self.probe;
                async move { (index, probe.probe(url).await) }
            })
            .buffer_unordered(limit);

        let mut completed = 0;
        let mut failures = 0;
        while let Some((index, reachable)) = probes.next().await {
            results[index] = ProbeStatus::from(reachable);
            completed += 1;
            if !reachable {
                failures += 1;
            }

            if let Some(ref prog) = progress {
                prog.update_probe_progress(completed);
            }
        }

        if let Some(ref prog) = progress {
            prog.finish_probing(completed - failures, completed);
        }

        logging::log_probe_complete(urls.len(), failures, start_time.elapsed().as_millis());

        results
    }
}
