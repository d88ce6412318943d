use http::Method;

use super::{body, entity, items, items_entity};
use crate::client::{
    ApiCall, ApiClient, ApiClientError, ItemStream, MediaType, OperationDescriptor, ParameterSpec,
    ResponseEntity, SecurityScheme,
};
use crate::model::{Pet, PetStatus};

const PRODUCES: &[MediaType] = &[MediaType::Xml, MediaType::Json];
const CONSUMES: &[MediaType] = &[MediaType::Json, MediaType::Xml, MediaType::FormUrlEncoded];
const PETSTORE_AUTH: &[SecurityScheme] = &[SecurityScheme::PetstoreAuth];

/// `POST /pet`
pub static ADD_PET: OperationDescriptor = OperationDescriptor {
    operation_id: "addPet",
    method: Method::POST,
    path: "/pet",
    produces: PRODUCES,
    consumes: CONSUMES,
    parameters: &[ParameterSpec::body("pet").required()],
    security: PETSTORE_AUTH,
};

/// `PUT /pet`
pub static UPDATE_PET: OperationDescriptor = OperationDescriptor {
    operation_id: "updatePet",
    method: Method::PUT,
    path: "/pet",
    produces: PRODUCES,
    consumes: CONSUMES,
    parameters: &[ParameterSpec::body("pet").required()],
    security: PETSTORE_AUTH,
};

/// `GET /pet/findByStatus`
pub static FIND_PETS_BY_STATUS: OperationDescriptor = OperationDescriptor {
    operation_id: "findPetsByStatus",
    method: Method::GET,
    path: "/pet/findByStatus",
    produces: PRODUCES,
    consumes: &[],
    parameters: &[ParameterSpec::query("status")],
    security: PETSTORE_AUTH,
};

/// `GET /pet/findByTags`, tags repeated as `tags=a&tags=b`
pub static FIND_PETS_BY_TAGS: OperationDescriptor = OperationDescriptor {
    operation_id: "findPetsByTags",
    method: Method::GET,
    path: "/pet/findByTags",
    produces: PRODUCES,
    consumes: &[],
    parameters: &[ParameterSpec::query("tags").multi()],
    security: PETSTORE_AUTH,
};

/// `GET /pet/{petId}`
pub static GET_PET_BY_ID: OperationDescriptor = OperationDescriptor {
    operation_id: "getPetById",
    method: Method::GET,
    path: "/pet/{petId}",
    produces: PRODUCES,
    consumes: &[],
    parameters: &[ParameterSpec::path("petId")],
    security: &[SecurityScheme::ApiKey, SecurityScheme::PetstoreAuth],
};

/// `POST /pet/{petId}`, name and status sent as query parameters
pub static UPDATE_PET_WITH_FORM: OperationDescriptor = OperationDescriptor {
    operation_id: "updatePetWithForm",
    method: Method::POST,
    path: "/pet/{petId}",
    produces: &[],
    consumes: &[],
    parameters: &[
        ParameterSpec::path("petId"),
        ParameterSpec::query("name"),
        ParameterSpec::query("status"),
    ],
    security: PETSTORE_AUTH,
};

/// `DELETE /pet/{petId}`
pub static DELETE_PET: OperationDescriptor = OperationDescriptor {
    operation_id: "deletePet",
    method: Method::DELETE,
    path: "/pet/{petId}",
    produces: &[],
    consumes: &[],
    parameters: &[ParameterSpec::path("petId"), ParameterSpec::header("api_key")],
    security: PETSTORE_AUTH,
};

/// Everything about pets.
#[derive(Debug, Clone)]
pub struct PetApi {
    client: ApiClient,
}

impl PetApi {
    /// Creates the group on top of a client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Prepares `addPet`.
    ///
    /// # Errors
    ///
    /// Fails if the pet cannot be encoded.
    pub fn add_pet_request(&self, pet: &Pet) -> Result<ApiCall, ApiClientError> {
        self.client.call(&ADD_PET).with_body(pet)
    }

    /// Adds a new pet to the store.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn add_pet(&self, pet: &Pet) -> Result<Pet, ApiClientError> {
        body(self.add_pet_request(pet)?).await
    }

    /// Adds a new pet to the store, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn add_pet_with_http_info(
        &self,
        pet: &Pet,
    ) -> Result<ResponseEntity<Pet>, ApiClientError> {
        entity(self.add_pet_request(pet)?).await
    }

    /// Prepares `updatePet`.
    ///
    /// # Errors
    ///
    /// Fails if the pet cannot be encoded.
    pub fn update_pet_request(&self, pet: &Pet) -> Result<ApiCall, ApiClientError> {
        self.client.call(&UPDATE_PET).with_body(pet)
    }

    /// Updates an existing pet.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn update_pet(&self, pet: &Pet) -> Result<Pet, ApiClientError> {
        body(self.update_pet_request(pet)?).await
    }

    /// Updates an existing pet, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn update_pet_with_http_info(
        &self,
        pet: &Pet,
    ) -> Result<ResponseEntity<Pet>, ApiClientError> {
        entity(self.update_pet_request(pet)?).await
    }

    /// Prepares `findPetsByStatus`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn find_pets_by_status_request(
        &self,
        status: Option<PetStatus>,
    ) -> Result<ApiCall, ApiClientError> {
        Ok(self
            .client
            .call(&FIND_PETS_BY_STATUS)
            .with_query_param("status", status))
    }

    /// Finds pets by status.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn find_pets_by_status(
        &self,
        status: Option<PetStatus>,
    ) -> Result<Vec<Pet>, ApiClientError> {
        items(self.find_pets_by_status_request(status)?).await
    }

    /// Finds pets by status, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn find_pets_by_status_with_http_info(
        &self,
        status: Option<PetStatus>,
    ) -> Result<ResponseEntity<Vec<Pet>>, ApiClientError> {
        items_entity(self.find_pets_by_status_request(status)?).await
    }

    /// Finds pets by status, yielding each pet as soon as it is decoded.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn find_pets_by_status_stream(
        &self,
        status: Option<PetStatus>,
    ) -> Result<ItemStream<Pet>, ApiClientError> {
        self.find_pets_by_status_request(status)?.stream().await
    }

    /// Prepares `findPetsByTags`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn find_pets_by_tags_request(&self, tags: &[&str]) -> Result<ApiCall, ApiClientError> {
        Ok(self
            .client
            .call(&FIND_PETS_BY_TAGS)
            .with_query_param("tags", tags))
    }

    /// Finds pets by tags.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn find_pets_by_tags(&self, tags: &[&str]) -> Result<Vec<Pet>, ApiClientError> {
        items(self.find_pets_by_tags_request(tags)?).await
    }

    /// Finds pets by tags, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn find_pets_by_tags_with_http_info(
        &self,
        tags: &[&str],
    ) -> Result<ResponseEntity<Vec<Pet>>, ApiClientError> {
        items_entity(self.find_pets_by_tags_request(tags)?).await
    }

    /// Finds pets by tags, yielding each pet as soon as it is decoded.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn find_pets_by_tags_stream(
        &self,
        tags: &[&str],
    ) -> Result<ItemStream<Pet>, ApiClientError> {
        self.find_pets_by_tags_request(tags)?.stream().await
    }

    /// Prepares `getPetById`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn get_pet_by_id_request(&self, pet_id: i64) -> Result<ApiCall, ApiClientError> {
        Ok(self
            .client
            .call(&GET_PET_BY_ID)
            .with_path_param("petId", pet_id))
    }

    /// Finds a pet by id.
    ///
    /// # Errors
    ///
    /// A missing pet is an [`ApiClientError::HttpStatusFailure`] with status 404.
    pub async fn get_pet_by_id(&self, pet_id: i64) -> Result<Pet, ApiClientError> {
        body(self.get_pet_by_id_request(pet_id)?).await
    }

    /// Finds a pet by id, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn get_pet_by_id_with_http_info(
        &self,
        pet_id: i64,
    ) -> Result<ResponseEntity<Pet>, ApiClientError> {
        entity(self.get_pet_by_id_request(pet_id)?).await
    }

    /// Prepares `updatePetWithForm`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn update_pet_with_form_request(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<&str>,
    ) -> Result<ApiCall, ApiClientError> {
        Ok(self
            .client
            .call(&UPDATE_PET_WITH_FORM)
            .with_path_param("petId", pet_id)
            .with_query_param("name", name)
            .with_query_param("status", status))
    }

    /// Updates a pet name and status.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn update_pet_with_form(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<&str>,
    ) -> Result<(), ApiClientError> {
        body(self.update_pet_with_form_request(pet_id, name, status)?).await
    }

    /// Updates a pet name and status, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn update_pet_with_form_with_http_info(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<&str>,
    ) -> Result<ResponseEntity<()>, ApiClientError> {
        entity(self.update_pet_with_form_request(pet_id, name, status)?).await
    }

    /// Prepares `deletePet`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn delete_pet_request(
        &self,
        pet_id: i64,
        api_key: Option<&str>,
    ) -> Result<ApiCall, ApiClientError> {
        Ok(self
            .client
            .call(&DELETE_PET)
            .with_path_param("petId", pet_id)
            .with_header("api_key", api_key))
    }

    /// Deletes a pet.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn delete_pet(&self, pet_id: i64, api_key: Option<&str>) -> Result<(), ApiClientError> {
        body(self.delete_pet_request(pet_id, api_key)?).await
    }

    /// Deletes a pet, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn delete_pet_with_http_info(
        &self,
        pet_id: i64,
        api_key: Option<&str>,
    ) -> Result<ResponseEntity<()>, ApiClientError> {
        entity(self.delete_pet_request(pet_id, api_key)?).await
    }
}

#[cfg(test)]
mod tests {
    use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

    use super::*;

    fn pet_api() -> PetApi {
        let client = ApiClient::builder()
            .with_base_url("http://localhost:8080/api/v3")
            .expect("valid url")
            .with_api_key("special-key")
            .with_bearer_token("access-token")
            .build()
            .expect("client");
        PetApi::new(client)
    }

    #[test]
    fn should_prepare_get_pet_by_id() {
        let request = pet_api()
            .get_pet_by_id_request(1)
            .expect("call")
            .into_request()
            .expect("request");

        insta::assert_snapshot!(request.url(), @"http://localhost:8080/api/v3/pet/1");
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.headers().get(ACCEPT).expect("accept"),
            "application/json, application/xml"
        );
        assert_eq!(request.headers().get("api_key").expect("api key"), "special-key");
        assert_eq!(
            request.headers().get(AUTHORIZATION).expect("bearer"),
            "Bearer access-token"
        );
    }

    #[test]
    fn should_send_bearer_only_to_get_pet_by_id() {
        let client = ApiClient::builder()
            .with_base_url("http://localhost:8080/api/v3")
            .expect("valid url")
            .with_bearer_token("access-token")
            .build()
            .expect("client");

        let request = PetApi::new(client)
            .get_pet_by_id_request(1)
            .expect("call")
            .into_request()
            .expect("request");

        assert!(request.headers().get("api_key").is_none());
        assert_eq!(
            request.headers().get(AUTHORIZATION).expect("bearer"),
            "Bearer access-token"
        );
    }

    #[test]
    fn should_prepare_add_pet_as_json() {
        let request = pet_api()
            .add_pet_request(&Pet::new("doggie"))
            .expect("call")
            .into_request()
            .expect("request");

        assert_eq!(
            request.headers().get(CONTENT_TYPE).expect("content type"),
            "application/json"
        );
        assert_eq!(
            request.headers().get(AUTHORIZATION).expect("bearer"),
            "Bearer access-token"
        );
        let body = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .expect("buffered body");
        insta::assert_snapshot!(String::from_utf8_lossy(body), @r#"{"name":"doggie","photoUrls":[]}"#);
    }

    #[test]
    fn should_repeat_tags() {
        let request = pet_api()
            .find_pets_by_tags_request(&["tag1", "tag2"])
            .expect("call")
            .into_request()
            .expect("request");

        assert_eq!(request.url().query(), Some("tags=tag1&tags=tag2"));
    }

    #[test]
    fn should_send_update_fields_as_query() {
        let request = pet_api()
            .update_pet_with_form_request(10, Some("Rex"), None)
            .expect("call")
            .into_request()
            .expect("request");

        insta::assert_snapshot!(request.url(), @"http://localhost:8080/api/v3/pet/10?name=Rex");
        assert!(request.body().is_none());
        assert!(request.headers().get(ACCEPT).is_none());
    }

    #[test]
    fn should_send_delete_api_key_header() {
        let request = pet_api()
            .delete_pet_request(10, Some("delete-key"))
            .expect("call")
            .into_request()
            .expect("request");

        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.headers().get("api_key").expect("api key"), "delete-key");
    }
}
