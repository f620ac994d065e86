use anyhow::{anyhow, Context};
use apexflow_shared::{
    const_config::{
        client::CLIENT_CONTENT_TYPE,
        path::{RequestPath, PATH_AUTH_LOGIN, PATH_USER_PERMISSIONS},
    },
    envelope::ApiEnvelope,
    errors::NotLoggedInError,
    req_args::LoginReqArgs,
    session::SessionState,
    token::AuthToken,
    uac::{LoginResponse, Permissions, UserInfo},
};
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use futures::channel::oneshot;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    StatusCode,
};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::{config::ClientConfig, session::SessionStore};

pub mod api;

/// Argument for requests that do not send anything
pub const NO_ARGS: &[(&str, &str)] = &[];

#[derive(Debug, Clone)]
pub struct Client {
    api_client: reqwest::Client,
    inner: Arc<Mutex<ClientInner>>,
}

#[derive(Debug)]
struct ClientInner {
    api_base_url: String,
    session: SessionStore,
}

impl ClientInner {
    #[tracing::instrument]
    fn new(api_base_url: String, session: SessionStore) -> Self {
        Self {
            api_base_url,
            session,
        }
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE")]
    pub fn new(config: &ClientConfig, session: SessionStore) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CLIENT_CONTENT_TYPE));
        for (name, value) in &config.default_headers {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())
                    .with_context(|| format!("invalid default header name: {name:?}"))?,
                HeaderValue::from_str(value)
                    .with_context(|| format!("invalid value for default header {name:?}"))?,
            );
        }
        let builder = reqwest::Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout());
        let api_client = builder.build().context("unable to create reqwest client")?;
        Ok(Self {
            api_client,
            inner: Arc::new(Mutex::new(ClientInner::new(
                config.api_base_url(),
                session,
            ))),
        })
    }

    /// Runs `f` with exclusive access to the session store. Every store
    /// operation completes inside a single call so no partial update is ever
    /// visible to in-flight requests
    pub fn with_session<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> R {
        f(&mut self.inner.lock().expect("mutex poisoned").session)
    }

    /// Snapshot of the current session
    pub fn session_state(&self) -> SessionState {
        self.with_session(|session| session.state().clone())
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        self.with_session(|session| session.user_info().cloned())
    }

    pub fn is_logged_in(&self) -> bool {
        self.with_session(|session| session.is_logged_in())
    }

    /// Sends the credentials, stores the returned token, then loads the
    /// permissions for that token and stores them with the identity.
    /// If the permissions cannot be loaded the token is discarded again.
    #[tracing::instrument(skip(ui_notify))]
    pub fn login<F: UiCallBack>(
        &self,
        args: LoginReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<UserInfo>> {
        let (tx, rx) = oneshot::channel();
        let request = match self.build_request(&PATH_AUTH_LOGIN.into(), &args.to_json()) {
            Ok((request, _)) => request,
            Err(e) => {
                deliver(tx, Err(e), ui_notify);
                return rx;
            }
        };
        let client = self.clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_login(resp, client).await;
            deliver(tx, msg, ui_notify);
        };
        reqwest_cross::fetch(request, on_done);
        rx
    }

    /// Returns the request ready to send and the token it carries (if any)
    ///
    /// The token is read now so whatever is stored at the moment of the call is
    /// what gets sent
    #[tracing::instrument(skip(args))]
    // WARNING: Must skip args as it my contain sensitive info and "safe" versions
    // would usually already be logged by the caller
    fn build_request<T>(
        &self,
        request_path: &RequestPath,
        args: &T,
    ) -> anyhow::Result<(reqwest::RequestBuilder, Option<AuthToken>)>
    where
        T: serde::Serialize + ?Sized,
    {
        let (url, token) = {
            let guard = self.inner.lock().expect("mutex poisoned");
            (
                format!("{}{}", guard.api_base_url, request_path.path),
                guard.session.token().cloned(),
            )
        };
        if request_path.requires_token && token.is_none() {
            return Err(NotLoggedInError.into());
        }
        let mut request = self.api_client.request(request_path.method.clone(), url);
        if let Some(token) = &token {
            request = request.header(AUTHORIZATION, token.bearer_header_value());
        }
        request = if request_path.uses_query_args() {
            request.query(args)
        } else {
            match serde_json::to_value(args).context("failed to serialize request body")? {
                // Nothing to send, leave the body empty
                serde_json::Value::Array(x) if x.is_empty() => request,
                body => request.json(&body),
            }
        };
        Ok((request, token))
    }

    /// Builds the request and starts it. If the request cannot be built the
    /// error is delivered straight away so callers always get an answer
    fn initiate_request<T, R, F, C, H, O>(
        &self,
        request_path: RequestPath,
        args: &T,
        ui_notify: F,
        on_done: C,
    ) -> oneshot::Receiver<anyhow::Result<R>>
    where
        T: serde::Serialize + Debug + ?Sized,
        R: Send + 'static,
        F: UiCallBack,
        C: FnOnce(Option<AuthToken>, oneshot::Sender<anyhow::Result<R>>, F) -> H,
        H: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        let (tx, rx) = oneshot::channel();
        match self.build_request(&request_path, args) {
            Ok((request, sent_token)) => {
                reqwest_cross::fetch(request, on_done(sent_token, tx, ui_notify));
            }
            Err(e) => deliver(tx, Err(e), ui_notify),
        }
        rx
    }

    fn send_request_expect_json<F, T, U>(
        &self,
        request_path: impl Into<RequestPath>,
        args: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        T: serde::Serialize + Debug + ?Sized,
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        self.send_request_expect_json_then(request_path, args, ui_notify, |_, x| Ok(x))
    }

    /// Like [`Self::send_request_expect_json`] but runs `after` on the payload
    /// before it is handed to the caller
    fn send_request_expect_json_then<F, T, U, R, A>(
        &self,
        request_path: impl Into<RequestPath>,
        args: &T,
        ui_notify: F,
        after: A,
    ) -> oneshot::Receiver<anyhow::Result<R>>
    where
        T: serde::Serialize + Debug + ?Sized,
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
        R: Send + 'static,
        A: 'static + Send + FnOnce(&Client, U) -> anyhow::Result<R>,
    {
        let client = self.clone();
        self.initiate_request(
            request_path.into(),
            args,
            ui_notify,
            move |sent_token, tx, ui_notify| {
                move |resp: reqwest::Result<reqwest::Response>| async move {
                    let msg = match process_json_body(resp, &client, sent_token.as_ref()).await {
                        Ok(payload) => after(&client, payload),
                        Err(e) => Err(e),
                    };
                    deliver(tx, msg, ui_notify);
                }
            },
        )
    }

    #[cfg(feature = "expose_internal")]
    pub fn expose_internal_send_request_expect_json<F, T, U>(
        &self,
        request_path: impl Into<RequestPath>,
        args: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        T: serde::Serialize + Debug + ?Sized,
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        self.send_request_expect_json(request_path, args, ui_notify)
    }

    fn send_request_expect_empty<F, T>(
        &self,
        request_path: impl Into<RequestPath>,
        args: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        T: serde::Serialize + Debug + ?Sized,
        F: UiCallBack,
    {
        self.send_request_expect_empty_then(request_path, args, ui_notify, |_| Ok(()))
    }

    /// Like [`Self::send_request_expect_empty`] but runs `after` once the
    /// server has accepted the request
    fn send_request_expect_empty_then<F, T, R, A>(
        &self,
        request_path: impl Into<RequestPath>,
        args: &T,
        ui_notify: F,
        after: A,
    ) -> oneshot::Receiver<anyhow::Result<R>>
    where
        T: serde::Serialize + Debug + ?Sized,
        F: UiCallBack,
        R: Send + 'static,
        A: 'static + Send + FnOnce(&Client) -> anyhow::Result<R>,
    {
        let client = self.clone();
        self.initiate_request(
            request_path.into(),
            args,
            ui_notify,
            move |sent_token, tx, ui_notify| {
                move |resp: reqwest::Result<reqwest::Response>| async move {
                    let msg = match process_empty(resp, &client, sent_token.as_ref()).await {
                        Ok(()) => after(&client),
                        Err(e) => Err(e),
                    };
                    deliver(tx, msg, ui_notify);
                }
            },
        )
    }

    fn send_request_no_wait<T>(&self, request_path: impl Into<RequestPath>, args: &T)
    where
        T: serde::Serialize + Debug + ?Sized,
    {
        match self.build_request(&request_path.into(), args) {
            Ok((request, _)) => {
                reqwest_cross::fetch(request, |_: reqwest::Result<reqwest::Response>| async {})
            }
            Err(e) => warn!(?e, "request not sent"),
        }
    }

    fn clear_session(&self) {
        self.with_session(|session| session.logout());
    }
}

/// Hands the result to the receiver and lets the UI know. The receiver may
/// already be gone if the UI lost interest, that is not an error
fn deliver<T, F: UiCallBack>(tx: oneshot::Sender<T>, msg: T, ui_notify: F) {
    if tx.send(msg).is_err() {
        info!("receiver dropped before the response was delivered");
    }
    ui_notify();
}

#[tracing::instrument(ret, err(Debug), skip(client))]
async fn process_empty(
    response: reqwest::Result<reqwest::Response>,
    client: &Client,
    sent_token: Option<&AuthToken>,
) -> anyhow::Result<()> {
    let (response, status) = extract_response(response)?;
    if !status.is_success() {
        return Err(handle_error(response, client, sent_token).await);
    }
    let body = response
        .text()
        .await
        .context("failed to read response body")?;
    if body.trim().is_empty() {
        return Ok(());
    }
    let envelope: ApiEnvelope<serde_json::Value> =
        serde_json::from_str(&body).context("failed to parse result as json")?;
    envelope.into_result()?;
    Ok(())
}

#[tracing::instrument(ret, err(Debug), skip(client))]
async fn process_json_body<T>(
    response: reqwest::Result<reqwest::Response>,
    client: &Client,
    sent_token: Option<&AuthToken>,
) -> anyhow::Result<T>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let (response, status) = extract_response(response)?;
    if !status.is_success() {
        return Err(handle_error(response, client, sent_token).await);
    }
    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .context("failed to parse result as json")?;
    Ok(envelope.into_data()?)
}

#[tracing::instrument(ret, err(Debug), skip(client))]
async fn process_login(
    response: reqwest::Result<reqwest::Response>,
    client: Client,
) -> anyhow::Result<UserInfo> {
    let LoginResponse { token, user } =
        process_json_body::<LoginResponse>(response, &client, None).await?;
    client
        .with_session(|session| session.set_token(token))
        .context("failed to store token")?;

    let permissions = match fetch_permissions(&client).await {
        Ok(permissions) => permissions,
        Err(e) => {
            client.clear_session();
            return Err(e.context("failed to load permissions after login"));
        }
    };
    if let Err(e) = client.with_session(|session| session.set_session(user.clone(), permissions)) {
        client.clear_session();
        return Err(anyhow::Error::new(e).context("failed to store session"));
    }
    info!(username = ?user.username, "login successful");
    Ok(user)
}

/// Loads the permissions for the stored token without going through the
/// callback machinery (used as the second step of login)
async fn fetch_permissions(client: &Client) -> anyhow::Result<Permissions> {
    let (request, sent_token) = client.build_request(&PATH_USER_PERMISSIONS.into(), NO_ARGS)?;
    let response = request.send().await;
    process_json_body(response, client, sent_token.as_ref()).await
}

/// Prefers the message from the backend's envelope when there is one
#[tracing::instrument(ret, skip(client))]
async fn handle_error(
    response: reqwest::Response,
    client: &Client,
    sent_token: Option<&AuthToken>,
) -> anyhow::Error {
    let status = response.status();
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    if let (StatusCode::UNAUTHORIZED, Some(sent_token)) = (status, sent_token) {
        // Only the token that was rejected is cleared, a newer login stays
        client.with_session(|session| {
            if session.token() == Some(sent_token) {
                warn!("token rejected by server, clearing session");
                session.logout();
            } else {
                info!("rejected token was already replaced");
            }
        });
    }
    let Ok(body) = response.text().await else {
        return anyhow!("failed to get response body");
    };
    if let Ok(envelope) = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body) {
        return anyhow::Error::new(envelope.into_rejection())
            .context(format!("request failed with status code: {status}"));
    }
    if body.is_empty() {
        anyhow!("request failed with status code: {status} and no body")
    } else {
        anyhow!("request failed with status code: {status}: {body}")
    }
}

/// Provides a way to standardize the error message
#[tracing::instrument(ret, err(Debug))]
fn extract_response(
    response: reqwest::Result<reqwest::Response>,
) -> anyhow::Result<(reqwest::Response, StatusCode)> {
    if response.is_err() {
        info!("Response is err: {:#?}", response);
    }
    let response = response.context("failed to send request")?;
    let status = response.status();
    Ok((response, status))
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

#[cfg(not(target_arch = "wasm32"))]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send {}
}

#[cfg(target_arch = "wasm32")]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> {}
}
