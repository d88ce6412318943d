use http::Method;

use super::{body, entity};
use crate::client::{
    ApiCall, ApiClient, ApiClientError, MediaType, OperationDescriptor, ParameterSpec,
    ResponseEntity,
};
use crate::model::User;

const PRODUCES: &[MediaType] = &[MediaType::Xml, MediaType::Json];
const CONSUMES: &[MediaType] = &[MediaType::Json, MediaType::Xml, MediaType::FormUrlEncoded];

/// `POST /user`
pub static CREATE_USER: OperationDescriptor = OperationDescriptor {
    operation_id: "createUser",
    method: Method::POST,
    path: "/user",
    produces: &[MediaType::Json, MediaType::Xml],
    consumes: CONSUMES,
    parameters: &[ParameterSpec::body("user")],
    security: &[],
};

/// `POST /user/createWithList`
pub static CREATE_USERS_WITH_LIST_INPUT: OperationDescriptor = OperationDescriptor {
    operation_id: "createUsersWithListInput",
    method: Method::POST,
    path: "/user/createWithList",
    produces: PRODUCES,
    consumes: &[MediaType::Json],
    parameters: &[ParameterSpec::body("user")],
    security: &[],
};

/// `GET /user/login`
pub static LOGIN_USER: OperationDescriptor = OperationDescriptor {
    operation_id: "loginUser",
    method: Method::GET,
    path: "/user/login",
    produces: PRODUCES,
    consumes: &[],
    parameters: &[
        ParameterSpec::query("username"),
        ParameterSpec::query("password"),
    ],
    security: &[],
};

/// `GET /user/logout`
pub static LOGOUT_USER: OperationDescriptor = OperationDescriptor {
    operation_id: "logoutUser",
    method: Method::GET,
    path: "/user/logout",
    produces: &[],
    consumes: &[],
    parameters: &[],
    security: &[],
};

/// `GET /user/{username}`
pub static GET_USER_BY_NAME: OperationDescriptor = OperationDescriptor {
    operation_id: "getUserByName",
    method: Method::GET,
    path: "/user/{username}",
    produces: PRODUCES,
    consumes: &[],
    parameters: &[ParameterSpec::path("username")],
    security: &[],
};

/// `PUT /user/{username}`
pub static UPDATE_USER: OperationDescriptor = OperationDescriptor {
    operation_id: "updateUser",
    method: Method::PUT,
    path: "/user/{username}",
    produces: &[],
    consumes: CONSUMES,
    parameters: &[ParameterSpec::path("username"), ParameterSpec::body("user")],
    security: &[],
};

/// `DELETE /user/{username}`
pub static DELETE_USER: OperationDescriptor = OperationDescriptor {
    operation_id: "deleteUser",
    method: Method::DELETE,
    path: "/user/{username}",
    produces: &[],
    consumes: &[],
    parameters: &[ParameterSpec::path("username")],
    security: &[],
};

/// Operations about users.
#[derive(Debug, Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    /// Creates the group on top of a client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Prepares `createUser`.
    ///
    /// # Errors
    ///
    /// Fails if the user cannot be encoded.
    pub fn create_user_request(&self, user: Option<&User>) -> Result<ApiCall, ApiClientError> {
        self.client.call(&CREATE_USER).with_optional_body(user)
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn create_user(&self, user: Option<&User>) -> Result<User, ApiClientError> {
        body(self.create_user_request(user)?).await
    }

    /// Creates a user, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn create_user_with_http_info(
        &self,
        user: Option<&User>,
    ) -> Result<ResponseEntity<User>, ApiClientError> {
        entity(self.create_user_request(user)?).await
    }

    /// Prepares `createUsersWithListInput`.
    ///
    /// # Errors
    ///
    /// Fails if the users cannot be encoded.
    pub fn create_users_with_list_input_request(
        &self,
        users: Option<&[User]>,
    ) -> Result<ApiCall, ApiClientError> {
        self.client
            .call(&CREATE_USERS_WITH_LIST_INPUT)
            .with_optional_body(users)
    }

    /// Creates a list of users.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn create_users_with_list_input(
        &self,
        users: Option<&[User]>,
    ) -> Result<User, ApiClientError> {
        body(self.create_users_with_list_input_request(users)?).await
    }

    /// Creates a list of users, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn create_users_with_list_input_with_http_info(
        &self,
        users: Option<&[User]>,
    ) -> Result<ResponseEntity<User>, ApiClientError> {
        entity(self.create_users_with_list_input_request(users)?).await
    }

    /// Prepares `loginUser`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn login_user_request(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<ApiCall, ApiClientError> {
        Ok(self
            .client
            .call(&LOGIN_USER)
            .with_query_param("username", username)
            .with_query_param("password", password))
    }

    /// Logs a user into the system, returning the session message.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn login_user(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, ApiClientError> {
        body(self.login_user_request(username, password)?).await
    }

    /// Logs a user into the system, keeping status and headers.
    ///
    /// The rate limit and session expiry come back as the `X-Rate-Limit` and
    /// `X-Expires-After` headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn login_user_with_http_info(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<ResponseEntity<String>, ApiClientError> {
        entity(self.login_user_request(username, password)?).await
    }

    /// Prepares `logoutUser`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn logout_user_request(&self) -> Result<ApiCall, ApiClientError> {
        Ok(self.client.call(&LOGOUT_USER))
    }

    /// Logs out the current session.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn logout_user(&self) -> Result<(), ApiClientError> {
        body(self.logout_user_request()?).await
    }

    /// Logs out the current session, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn logout_user_with_http_info(&self) -> Result<ResponseEntity<()>, ApiClientError> {
        entity(self.logout_user_request()?).await
    }

    /// Prepares `getUserByName`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn get_user_by_name_request(&self, username: &str) -> Result<ApiCall, ApiClientError> {
        Ok(self
            .client
            .call(&GET_USER_BY_NAME)
            .with_path_param("username", username))
    }

    /// Gets a user by login name.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn get_user_by_name(&self, username: &str) -> Result<User, ApiClientError> {
        body(self.get_user_by_name_request(username)?).await
    }

    /// Gets a user by login name, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn get_user_by_name_with_http_info(
        &self,
        username: &str,
    ) -> Result<ResponseEntity<User>, ApiClientError> {
        entity(self.get_user_by_name_request(username)?).await
    }

    /// Prepares `updateUser`.
    ///
    /// # Errors
    ///
    /// Fails if the user cannot be encoded.
    pub fn update_user_request(
        &self,
        username: &str,
        user: Option<&User>,
    ) -> Result<ApiCall, ApiClientError> {
        self.client
            .call(&UPDATE_USER)
            .with_path_param("username", username)
            .with_optional_body(user)
    }

    /// Updates a user.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn update_user(&self, username: &str, user: Option<&User>) -> Result<(), ApiClientError> {
        body(self.update_user_request(username, user)?).await
    }

    /// Updates a user, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn update_user_with_http_info(
        &self,
        username: &str,
        user: Option<&User>,
    ) -> Result<ResponseEntity<()>, ApiClientError> {
        entity(self.update_user_request(username, user)?).await
    }

    /// Prepares `deleteUser`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn delete_user_request(&self, username: &str) -> Result<ApiCall, ApiClientError> {
        Ok(self
            .client
            .call(&DELETE_USER)
            .with_path_param("username", username))
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn delete_user(&self, username: &str) -> Result<(), ApiClientError> {
        body(self.delete_user_request(username)?).await
    }

    /// Deletes a user, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn delete_user_with_http_info(
        &self,
        username: &str,
    ) -> Result<ResponseEntity<()>, ApiClientError> {
        entity(self.delete_user_request(username)?).await
    }
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_TYPE;

    use super::*;

    fn user_api() -> UserApi {
        let client = ApiClient::builder()
            .with_base_url("http://localhost:8080/api/v3")
            .expect("valid url")
            .build()
            .expect("client");
        UserApi::new(client)
    }

    #[test]
    fn should_encode_login_query() {
        let request = user_api()
            .login_user_request(Some("a&b"), Some("p@ss word"))
            .expect("call")
            .into_request()
            .expect("request");

        assert_eq!(request.url().query(), Some("username=a%26b&password=p%40ss+word"));
    }

    #[test]
    fn should_send_user_list_as_json() {
        let users = [User::new("u1"), User::new("u2")];

        let request = user_api()
            .create_users_with_list_input_request(Some(users.as_slice()))
            .expect("call")
            .into_request()
            .expect("request");

        assert_eq!(
            request.headers().get(CONTENT_TYPE).expect("content type"),
            "application/json"
        );
        let body = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .expect("buffered body");
        insta::assert_snapshot!(String::from_utf8_lossy(body), @r#"[{"username":"u1"},{"username":"u2"}]"#);
    }

    #[test]
    fn should_update_user_without_body() {
        let request = user_api()
            .update_user_request("theUser", None)
            .expect("call")
            .into_request()
            .expect("request");

        insta::assert_snapshot!(request.url(), @"http://localhost:8080/api/v3/user/theUser");
        assert_eq!(request.method(), Method::PUT);
        assert!(request.body().is_none());
    }
}
