//! HTTP implementation of the service traits.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use trialplan_core::model::{
    FeasibilityParameters, FeasibilityResult, GeneratedStudy, GenerationForm, PlanningScenario,
};

use super::{
    FeasibilityService, GenerationService, SavedScenario, ScenarioListing, ScenarioMetadata,
    ScenarioPersistence, ServiceError, ServiceResult, StoredScenario,
};

const FEASIBILITY_PATH: &str = "api/planning/feasibility";
const GENERATION_PATH: &str = "api/generate/comprehensive-study";
const SCENARIOS_PATH: &str = "api/planning/scenarios";

/// Body of a scenario save request
#[derive(Serialize)]
struct SaveScenarioRequest<'a> {
    name: &'a str,
    payload: &'a PlanningScenario,
    metadata: &'a ScenarioMetadata,
}

/// Client for all backend services behind one base URL
#[derive(Debug, Clone)]
pub struct HttpServices {
    base_url: Url,
    client: Client,
}

impl HttpServices {
    pub fn new(base_url: &str, timeout: Duration) -> ServiceResult<Self> {
        // Url::join drops the last path segment unless it ends with '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| ServiceError::Transport(format!("invalid service url '{base_url}': {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> ServiceResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ServiceError::Transport(format!("invalid endpoint '{path}': {e}")))
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ServiceResult<T> {
        let url = self.url(path)?;
        tracing::debug!(url = url.as_str(), "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        decode(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ServiceResult<T> {
        let url = self.url(path)?;
        tracing::debug!(url = url.as_str(), "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ServiceResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::Http {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

impl FeasibilityService for HttpServices {
    async fn assess_feasibility(
        &self,
        params: &FeasibilityParameters,
    ) -> ServiceResult<FeasibilityResult> {
        self.post(FEASIBILITY_PATH, params).await
    }
}

impl GenerationService for HttpServices {
    async fn generate_comprehensive_study(
        &self,
        params: &GenerationForm,
    ) -> ServiceResult<GeneratedStudy> {
        self.post(GENERATION_PATH, params).await
    }
}

impl ScenarioPersistence for HttpServices {
    async fn save_planning_scenario(
        &self,
        name: &str,
        payload: &PlanningScenario,
        metadata: &ScenarioMetadata,
    ) -> ServiceResult<SavedScenario> {
        let request = SaveScenarioRequest {
            name,
            payload,
            metadata,
        };
        self.post(SCENARIOS_PATH, &request).await
    }

    async fn list_planning_scenarios(&self) -> ServiceResult<Vec<ScenarioListing>> {
        self.get(SCENARIOS_PATH).await
    }

    async fn load_planning_scenario_by_id(&self, id: &str) -> ServiceResult<StoredScenario> {
        self.get(&format!("{SCENARIOS_PATH}/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let services = HttpServices::new("http://localhost:8000/backend", Duration::from_secs(5)).unwrap();
        assert_eq!(
            services.url(FEASIBILITY_PATH).unwrap().as_str(),
            "http://localhost:8000/backend/api/planning/feasibility"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpServices::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[test]
    fn test_scenario_path_with_id() {
        let services = HttpServices::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
        assert_eq!(
            services.url(&format!("{SCENARIOS_PATH}/abc")).unwrap().as_str(),
            "http://localhost:8000/api/planning/scenarios/abc"
        );
    }
}
