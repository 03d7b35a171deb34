use crate::filter::category::{CategoryTag, known_category_table};
use crate::filter::controller::FilterController;
use crate::filter::systems::{CategoryToggleEvent, ToggleSource};
use crate::filter::visibility::VisibilityState;
use crate::ui::filter_buttons::FilterButton;
use bevy::prelude::*;
use constants::category::get_category_label;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Outbound queue towards the embedding page, flushed once per frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the parent page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub(crate) fn queued_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        let Ok(data) = event.data().dyn_into::<js_sys::JsString>() else {
            return;
        };
        let message: String = data.into();
        if message.contains("jsonrpc") {
            if let Ok(mut queue) = queue_clone.lock() {
                queue.push(message);
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        error!("Window object not available, RPC bridge disabled");
        return;
    };
    if let Err(e) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", e);
        return;
    }

    // Ownership moves to JS; the listener lives for the page lifetime.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = match queue_res.0.lock() {
        Ok(mut queue) => std::mem::take(&mut *queue),
        Err(_) => Vec::new(),
    };

    for content in messages {
        message_events.write(IncomingRpcMessage { content });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    controller: Res<FilterController>,
    buttons: Query<&FilterButton>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut toggle_events: EventWriter<CategoryToggleEvent>,
) {
    let button_states: Vec<(CategoryTag, bool)> = buttons
        .iter()
        .map(|b| (b.category.clone(), b.active))
        .collect();

    // Toggles queued by earlier requests in this batch apply before any
    // later one, so answers are computed against this running state.
    let mut context = RpcContext {
        controller: &controller,
        buttons: &button_states,
        visibility: controller.visibility().clone(),
    };

    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Dropping malformed RPC message: {}", parse_error);
                continue;
            }
        };
        debug!("RPC request: {}", request.method);

        let mut toggles = Vec::new();
        if let Some(response) = handle_rpc_request(&request, &mut context, &mut toggles) {
            rpc_interface.queue_response(response);
        }
        toggle_events.write_batch(toggles);
    }
}

/// Map state seen by one batch of requests.
struct RpcContext<'a> {
    controller: &'a FilterController,
    buttons: &'a [(CategoryTag, bool)],
    /// Visibility once every toggle queued so far in the batch is applied.
    visibility: VisibilityState,
}

/// Route one request to its handler. Requests without an id are notifications
/// and get no response, though their side effects still apply.
fn handle_rpc_request(
    request: &RpcRequest,
    context: &mut RpcContext,
    toggles: &mut Vec<CategoryToggleEvent>,
) -> Option<RpcResponse> {
    if request.jsonrpc != "2.0" {
        return request.id.clone().map(|id| {
            create_error_response(id, -32600, "Invalid request", None)
        });
    }

    let result = match request.method.as_str() {
        "toggle_category" => handle_toggle_category(&request.params, context, toggles),
        "get_visibility" => Ok(handle_get_visibility(context)),
        "get_categories" => Ok(handle_get_categories(context.controller)),
        "get_points" => Ok(handle_get_points(context.controller)),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError {
                code: -32601,
                message: "Method not found".to_string(),
                data: Some(serde_json::json!({"method": request.method})),
            })
        }
    };

    let id = request.id.clone()?;
    Some(match result {
        Ok(value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

fn handle_toggle_category(
    params: &serde_json::Value,
    context: &mut RpcContext,
    toggles: &mut Vec<CategoryToggleEvent>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct ToggleParams {
        category: String,
    }

    let parsed = serde_json::from_value::<ToggleParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'category' parameter"))?;

    let category = CategoryTag::known_from_str(&parsed.category).ok_or_else(|| {
        RpcError::invalid_params(&format!("Unknown category: {}", parsed.category))
    })?;

    if !context.controller.is_populated() {
        return Ok(serde_json::json!({
            "accepted": false,
            "reason": "points not loaded",
        }));
    }

    // The toggle lands next frame, so report the state it will produce.
    let (next, _) = context.visibility.toggle(&category);
    context.visibility = next;
    let will_be_visible = context.visibility.contains(&category);
    toggles.push(CategoryToggleEvent {
        category: category.clone(),
        source: ToggleSource::Rpc,
    });
    info!("RPC toggle queued for {}", category);

    Ok(serde_json::json!({
        "accepted": true,
        "category": category.as_tag(),
        "visible": will_be_visible,
    }))
}

fn handle_get_visibility(context: &RpcContext) -> serde_json::Value {
    let visible: Vec<&str> = context
        .visibility
        .iter()
        .map(CategoryTag::as_tag)
        .collect();

    let buttons: serde_json::Map<String, serde_json::Value> = context
        .buttons
        .iter()
        .map(|(category, active)| (category.as_tag().to_string(), (*active).into()))
        .collect();

    serde_json::json!({
        "visible": visible,
        "buttons": buttons,
        "ready": context.controller.is_populated(),
    })
}

fn handle_get_categories(controller: &FilterController) -> serde_json::Value {
    let categories: Vec<serde_json::Value> = known_category_table()
        .map(|(category, info)| {
            serde_json::json!({
                "category": category.as_tag(),
                "label": info.label,
                "icon": info.icon,
                "markers": controller.markers().count_for(&category),
                "visible": controller.is_visible(&category),
            })
        })
        .collect();

    serde_json::json!({ "categories": categories })
}

fn handle_get_points(controller: &FilterController) -> serde_json::Value {
    let points: Vec<serde_json::Value> = controller
        .points()
        .iter()
        .map(|(id, point)| {
            serde_json::json!({
                "id": id,
                "name": point.name,
                "type": point.category,
                "label": get_category_label(point.category.as_tag()),
                "lat": point.lat,
                "lng": point.lng,
            })
        })
        .collect();

    serde_json::json!({
        "count": controller.points().len(),
        "points": points,
    })
}

fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Flush queued notifications, then responses.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize message: {}", e);
                return;
            }
        };
        let Some(window) = window() else {
            error!("Window object not available");
            return;
        };
        match window.parent().ok().flatten() {
            Some(parent) => {
                if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                    error!("Failed to send message to parent: {:?}", e);
                }
            }
            None => warn!("No parent window available for message transmission"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::point_store::point;
    use crate::filter::surface::fake::{RecordingButtons, RecordingSurface};

    fn request(method: &str, params: serde_json::Value) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: Some(serde_json::json!(7)),
        }
    }

    fn populated() -> FilterController {
        let mut controller = FilterController::default();
        controller.populate(
            vec![point("A", "CAFE", 1.0, 1.0), point("B", "FOOD", 2.0, 2.0)],
            &mut RecordingSurface::default(),
            &mut RecordingButtons::new(),
        );
        controller
    }

    fn call(
        controller: &FilterController,
        req: &RpcRequest,
    ) -> (Option<RpcResponse>, Vec<CategoryToggleEvent>) {
        call_batch(controller, std::slice::from_ref(req))
            .pop()
            .unwrap()
    }

    fn call_batch(
        controller: &FilterController,
        requests: &[RpcRequest],
    ) -> Vec<(Option<RpcResponse>, Vec<CategoryToggleEvent>)> {
        let buttons = vec![(CategoryTag::Cafe, true), (CategoryTag::Mart, false)];
        let mut context = RpcContext {
            controller,
            buttons: &buttons,
            visibility: controller.visibility().clone(),
        };
        requests
            .iter()
            .map(|req| {
                let mut toggles = Vec::new();
                let response = handle_rpc_request(req, &mut context, &mut toggles);
                (response, toggles)
            })
            .collect()
    }

    #[test]
    fn toggle_category_queues_an_rpc_toggle() {
        let controller = populated();
        let req = request("toggle_category", serde_json::json!({"category": "cafe"}));
        let (response, toggles) = call(&controller, &req);

        let result = response.and_then(|r| r.result).unwrap();
        assert_eq!(result["accepted"], true);
        assert_eq!(result["category"], "CAFE");
        assert_eq!(result["visible"], false);
        assert_eq!(toggles.len(), 1);
        assert_eq!(toggles[0].category, CategoryTag::Cafe);
        assert_eq!(toggles[0].source, ToggleSource::Rpc);
    }

    #[test]
    fn same_frame_toggles_answer_in_sequence() {
        let controller = populated();
        let req = request("toggle_category", serde_json::json!({"category": "CAFE"}));
        let answers = call_batch(
            &controller,
            &[
                req.clone(),
                req,
                request("get_visibility", serde_json::Value::Null),
            ],
        );

        let visible: Vec<serde_json::Value> = answers[..2]
            .iter()
            .map(|(response, _)| {
                let result = response.clone().and_then(|r| r.result).unwrap();
                result["visible"].clone()
            })
            .collect();
        assert_eq!(visible, vec![serde_json::json!(false), serde_json::json!(true)]);

        let state = answers[2].0.clone().and_then(|r| r.result).unwrap();
        assert_eq!(state["visible"], serde_json::json!(["CAFE", "FOOD"]));

        // The controller itself only changes when the queued events apply.
        assert!(controller.is_visible(&CategoryTag::Cafe));
    }

    #[test]
    fn toggle_category_rejects_unknown_and_missing_categories() {
        let controller = populated();
        for params in [
            serde_json::json!({"category": "BAKERY"}),
            serde_json::json!({"name": "CAFE"}),
            serde_json::Value::Null,
        ] {
            let (response, toggles) = call(&controller, &request("toggle_category", params));
            let error = response.and_then(|r| r.error).unwrap();
            assert_eq!(error.code, -32602);
            assert!(toggles.is_empty());
        }
    }

    #[test]
    fn toggle_before_points_load_is_not_accepted() {
        let controller = FilterController::default();
        let req = request("toggle_category", serde_json::json!({"category": "FOOD"}));
        let (response, toggles) = call(&controller, &req);

        let result = response.and_then(|r| r.result).unwrap();
        assert_eq!(result["accepted"], false);
        assert!(toggles.is_empty());
    }

    #[test]
    fn notifications_apply_without_a_response() {
        let controller = populated();
        let mut req = request("toggle_category", serde_json::json!({"category": "FOOD"}));
        req.id = None;
        let (response, toggles) = call(&controller, &req);

        assert!(response.is_none());
        assert_eq!(toggles.len(), 1);
    }

    #[test]
    fn get_visibility_reports_state_and_buttons() {
        let controller = populated();
        let (response, _) = call(&controller, &request("get_visibility", serde_json::Value::Null));

        let result = response.and_then(|r| r.result).unwrap();
        assert_eq!(result["visible"], serde_json::json!(["CAFE", "FOOD"]));
        assert_eq!(result["buttons"]["CAFE"], true);
        assert_eq!(result["buttons"]["MART"], false);
        assert_eq!(result["ready"], true);
    }

    #[test]
    fn get_categories_lists_the_four_known_tags() {
        let (response, _) = call(
            &FilterController::default(),
            &request("get_categories", serde_json::Value::Null),
        );
        let result = response.and_then(|r| r.result).unwrap();
        let tags: Vec<&str> = result["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["category"].as_str().unwrap())
            .collect();
        assert_eq!(tags, vec!["CAFE", "FOOD", "MART", "PHARMACY"]);
    }

    #[test]
    fn get_categories_reports_marker_counts_and_visibility() {
        let controller = populated();
        let (response, _) = call(&controller, &request("get_categories", serde_json::Value::Null));

        let result = response.and_then(|r| r.result).unwrap();
        let cafe = &result["categories"][0];
        assert_eq!(cafe["markers"], 1);
        assert_eq!(cafe["visible"], true);
        let pharmacy = &result["categories"][3];
        assert_eq!(pharmacy["markers"], 0);
        assert_eq!(pharmacy["visible"], false);
    }

    #[test]
    fn get_points_returns_source_order() {
        let controller = populated();
        let (response, _) = call(&controller, &request("get_points", serde_json::Value::Null));

        let result = response.and_then(|r| r.result).unwrap();
        let points = result["points"].as_array().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(result["count"], 2);
        assert_eq!(points[0]["name"], "A");
        assert_eq!(points[0]["type"], "CAFE");
        assert_eq!(points[1]["id"], 1);
    }

    #[test]
    fn unknown_method_and_bad_version_are_errors() {
        let controller = populated();
        let (response, _) = call(&controller, &request("get_fps", serde_json::Value::Null));
        assert_eq!(response.and_then(|r| r.error).unwrap().code, -32601);

        let mut req = request("get_points", serde_json::Value::Null);
        req.jsonrpc = "1.0".to_string();
        let (response, _) = call(&controller, &req);
        assert_eq!(response.and_then(|r| r.error).unwrap().code, -32600);
    }

    #[test]
    fn request_params_default_to_null() {
        let req: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"get_visibility","id":1}"#).unwrap();
        assert!(req.params.is_null());
    }
}
