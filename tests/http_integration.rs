// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport using wiremock.

use std::time::Duration;

use modernforms::command::StateCommand;
use modernforms::protocol::{HttpClient, HttpConfig, Transport};
use modernforms::{DeviceState, Error, FanClient, FanDirection, ProtocolError, Season, StateField};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn host(server: &MockServer) -> String {
    server.address().to_string()
}

async fn mount_reply(server: &MockServer, request: serde_json::Value, reply: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/mf"))
        .and(body_json(request))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .mount(server)
        .await;
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn posts_json_to_mf_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mf"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"queryDynamicShadowData": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fanOn": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(host(&mock_server)).unwrap();
        let response = client.send(&StateCommand::query_dynamic()).await.unwrap();

        assert_eq!(response.state().unwrap().fan_on(), Some(true));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("busy"))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(host(&mock_server)).unwrap();
        let err = client
            .send(&StateCommand::new().fan_on(true))
            .await
            .unwrap_err();

        match err {
            ProtocolError::Status { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "busy");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_response_is_a_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(host(&mock_server))
            .with_timeout(Duration::from_millis(100))
            .into_client()
            .unwrap();
        let err = client.send(&StateCommand::query_dynamic()).await.unwrap_err();

        match err {
            ProtocolError::Timeout { timeout, .. } => {
                assert_eq!(timeout, Duration::from_millis(100));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_a_connection_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let client = HttpClient::new(addr.to_string()).unwrap();
        let err = client.send(&StateCommand::query_dynamic()).await.unwrap_err();

        assert!(matches!(err, ProtocolError::Connection { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn unanswered_connect_is_a_connection_error() {
        // Non-routable: the SYN is dropped or the route is rejected outright.
        let client = HttpConfig::new("10.255.255.1")
            .with_timeout(Duration::from_millis(300))
            .into_client()
            .unwrap();

        let started = std::time::Instant::now();
        let err = client.send(&StateCommand::query_dynamic()).await.unwrap_err();

        assert!(
            matches!(err, ProtocolError::Connection { .. }),
            "expected connection error, got {err:?}"
        );
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}

// ============================================================================
// FanClient Tests
// ============================================================================

mod fan_client {
    use super::*;

    #[tokio::test]
    async fn construction_does_not_contact_fan() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let fan = FanClient::new(host(&mock_server)).unwrap();
        assert!(fan.state().is_empty());
        assert!(matches!(
            fan.fan_on(),
            Err(Error::NotPopulated(StateField::FanOn))
        ));
    }

    #[tokio::test]
    async fn first_refresh_is_two_round_trips() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(json!({"queryDynamicShadowData": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fanOn": true,
                "fanSpeed": 3,
                "fanDirection": "forward",
                "lightOn": false,
                "lightBrightness": 70,
                "fanSleepTimer": 0
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(body_json(json!({"queryStaticShadowData": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fanType": "1818-56",
                "fanMotorType": "DC"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut fan = FanClient::new(host(&mock_server)).unwrap();

        let state = fan.get_device_state(None).await.unwrap();
        assert_eq!(state.fan_type(), Some("1818-56"));
        assert_eq!(state.extra("fanMotorType"), Some(&json!("DC")));

        // fanType is now cached: dynamic query only
        fan.get_device_state(None).await.unwrap();

        assert!(fan.fan_on().unwrap());
        assert_eq!(fan.fan_speed().unwrap(), 3);
        assert_eq!(fan.fan_direction().unwrap(), &FanDirection::Forward);
        assert!(!fan.light_on().unwrap());
        assert_eq!(fan.light_brightness().unwrap(), 70);
    }

    #[tokio::test]
    async fn setter_stores_echoed_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mf"))
            .and(body_json(json!({"lightBrightness": 150})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "lightOn": true,
                "lightBrightness": 100
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut fan = FanClient::new(host(&mock_server)).unwrap();
        fan.get_device_state(Some(DeviceState::new().with_fan_type("1818-56")))
            .await
            .unwrap();

        fan.set_light_brightness(150).await.unwrap();

        assert_eq!(fan.light_brightness().unwrap(), 100);
        assert!(fan.light_on().unwrap());
    }

    #[tokio::test]
    async fn first_command_also_fetches_static_data() {
        let mock_server = MockServer::start().await;

        mount_reply(
            &mock_server,
            json!({"fanSpeed": 4}),
            json!({"fanSpeed": 4}),
        )
        .await;
        mount_reply(
            &mock_server,
            json!({"queryStaticShadowData": 1}),
            json!({"fanType": "1818-56"}),
        )
        .await;

        let mut fan = FanClient::new(host(&mock_server)).unwrap();
        fan.set_fan_speed(4).await.unwrap();

        assert_eq!(fan.fan_speed().unwrap(), 4);
        assert_eq!(fan.fan_type().unwrap(), "1818-56");

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn set_fan_sends_only_given_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(json!({"fanOn": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fanOn": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut fan = FanClient::new(host(&mock_server)).unwrap();
        fan.get_device_state(Some(DeviceState::new().with_fan_type("1818-56")))
            .await
            .unwrap();

        fan.set_fan(true, None, None).await.unwrap();

        assert!(fan.fan_on().unwrap());
    }

    #[tokio::test]
    async fn toggle_fan_sends_seasonal_direction() {
        let mock_server = MockServer::start().await;
        let direction = Season::current().default_direction();

        Mock::given(method("POST"))
            .and(body_json(json!({"fanOn": false, "fanDirection": direction.as_str()})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fanOn": false,
                "fanDirection": direction.as_str()
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut fan = FanClient::new(host(&mock_server)).unwrap();
        fan.get_device_state(Some(
            DeviceState::new().with_fan_on(true).with_fan_type("1818-56"),
        ))
        .await
        .unwrap();

        fan.toggle_fan(None).await.unwrap();

        assert!(!fan.fan_on().unwrap());
        assert_eq!(fan.fan_direction().unwrap(), &direction);
    }

    #[tokio::test]
    async fn timeout_leaves_cache_unchanged() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"fanSpeed": 6}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let mut fan = FanClient::with_config(
            HttpConfig::new(host(&mock_server)).with_timeout(Duration::from_millis(100)),
        )
        .unwrap();
        fan.get_device_state(Some(
            DeviceState::new()
                .with_fan_speed(2)
                .with_fan_type("1818-56"),
        ))
        .await
        .unwrap();
        let before = fan.state().clone();

        let err = fan.set_fan_speed(6).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::Timeout { .. })
        ));
        assert_eq!(fan.state(), &before);
        assert_eq!(fan.fan_speed().unwrap(), 2);
    }

    #[tokio::test]
    async fn connection_failure_leaves_cache_unchanged() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let mut fan = FanClient::new(addr.to_string()).unwrap();
        fan.get_device_state(Some(
            DeviceState::new()
                .with_light_on(true)
                .with_fan_type("1818-56"),
        ))
        .await
        .unwrap();
        let before = fan.state().clone();

        let err = fan.toggle_light().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::Connection { .. })
        ));
        assert_eq!(fan.state(), &before);
    }

    #[tokio::test]
    async fn refresh_after_outage_keeps_last_known_state() {
        let mock_server = MockServer::start().await;

        mount_reply(
            &mock_server,
            json!({"queryDynamicShadowData": 1}),
            json!({"fanOn": true, "fanSpeed": 5}),
        )
        .await;
        mount_reply(
            &mock_server,
            json!({"queryStaticShadowData": 1}),
            json!({"fanType": "1818-56"}),
        )
        .await;

        let mut fan = FanClient::new(host(&mock_server)).unwrap();
        fan.get_device_state(None).await.unwrap();
        let before = fan.state().clone();

        mock_server.reset().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let err = fan.get_device_state(None).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::Status { status: 503, .. })
        ));
        assert_eq!(fan.state(), &before);
    }
}
