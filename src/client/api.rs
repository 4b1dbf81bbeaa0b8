//! JSON requests against the application's own API.
//!
//! Requests carry the session cookie. Error bodies are read as [`ErrorDto`] so the
//! server's message reaches the toast unchanged.

use serde::{de::DeserializeOwned, Serialize};

use crate::model::{
    api::ErrorDto,
    user::{LoginDto, UserDto},
};

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Status and raw body of a finished request
struct Reply {
    status: u16,
    body: String,
}

impl Reply {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn json<T: DeserializeOwned>(&self) -> Result<T, String> {
        serde_json::from_str(&self.body).map_err(|e| format!("Failed to parse response: {}", e))
    }

    fn error(&self) -> String {
        match serde_json::from_str::<ErrorDto>(&self.body) {
            Ok(error_dto) => error_dto.error,
            Err(_) if self.body.is_empty() => format!("Request failed with status {}", self.status),
            Err(_) => format!("Request failed with status {}: {}", self.status, self.body),
        }
    }

    fn into_json<T: DeserializeOwned>(self) -> Result<T, String> {
        if self.is_success() {
            self.json()
        } else {
            Err(self.error())
        }
    }
}

#[cfg(feature = "web")]
async fn send(method: Method, path: &str, body: Option<String>) -> Result<Reply, String> {
    use reqwasm::http::{Request, RequestCredentials};

    let request = match method {
        Method::Get => Request::get(path),
        Method::Post => Request::post(path),
        Method::Put => Request::put(path),
        Method::Delete => Request::delete(path),
    }
    .credentials(RequestCredentials::Include);

    let request = match body {
        Some(body) => request.header("Content-Type", "application/json").body(body),
        None => request,
    };

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    Ok(Reply { status, body })
}

#[cfg(not(feature = "web"))]
async fn send(method: Method, path: &str, _body: Option<String>) -> Result<Reply, String> {
    Err(format!(
        "{:?} {} is only available from the browser",
        method, path
    ))
}

fn encode<B: Serialize>(body: &B) -> Result<String, String> {
    serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    send(Method::Get, path, None).await?.into_json()
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    send(Method::Post, path, Some(encode(body)?))
        .await?
        .into_json()
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    send(Method::Put, path, Some(encode(body)?))
        .await?
        .into_json()
}

pub async fn delete(path: &str) -> Result<(), String> {
    let reply = send(Method::Delete, path, None).await?;

    if reply.is_success() {
        Ok(())
    } else {
        Err(reply.error())
    }
}

/// Retrieve the signed-in user, `None` when there is no valid session
pub async fn get_user() -> Result<Option<UserDto>, String> {
    let reply = send(Method::Get, "/api/auth/user", None).await?;

    match reply.status {
        200 => reply.json().map(Some),
        401 | 404 => Ok(None),
        _ => Err(reply.error()),
    }
}

pub async fn login(credentials: &LoginDto) -> Result<UserDto, String> {
    post("/api/auth/login", credentials).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_prefers_server_message() {
        let reply = Reply {
            status: 409,
            body: r#"{"error":"The common area is already reserved for this period"}"#.to_string(),
        };

        assert_eq!(
            reply.error(),
            "The common area is already reserved for this period"
        );
    }

    #[test]
    fn error_falls_back_to_status() {
        let reply = Reply {
            status: 502,
            body: String::new(),
        };

        assert_eq!(reply.error(), "Request failed with status 502");
    }

    #[test]
    fn non_success_is_not_parsed() {
        let reply = Reply {
            status: 400,
            body: r#"{"error":"Field 'name' is required"}"#.to_string(),
        };

        let result: Result<UserDto, String> = reply.into_json();
        assert_eq!(result, Err("Field 'name' is required".to_string()));
    }
}
