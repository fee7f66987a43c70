//! WASM bindings for the pagination control

pub mod flat_buffer;

use wasm_bindgen::prelude::*;

use crate::error::{PaginationError, Result};
use crate::navigation::{next_page, NavigationIntent, PageChanged};
use crate::render::ControlStrip;
use crate::responsive::{ItemMetrics, RangeSizer};
use crate::window::compute_window;
use crate::{PaginationConfig, PaginationState};

use self::flat_buffer::WindowBuffer;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    drop(console_log::init_with_level(log::Level::Debug));
}

fn js_error(err: PaginationError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// JS numbers arrive signed; negatives never reach the core
fn to_index(value: i32, name: &str) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        PaginationError::invalid(format!("{} must not be negative, got {}", name, value))
    })
}

fn parse_intent(control: &str, target: i32) -> Result<NavigationIntent> {
    match control {
        "select" => Ok(NavigationIntent::SelectPage(to_index(target, "target page")?)),
        other => other.parse(),
    }
}

/// Compute the visible window as a flat buffer (see [`flat_buffer`])
#[wasm_bindgen(js_name = computeWindow)]
pub fn compute_window_js(
    current_page: i32,
    page_count: i32,
    range_size: i32,
) -> std::result::Result<Vec<u32>, JsValue> {
    let run = || -> Result<Vec<u32>> {
        let page_count = to_index(page_count, "page count")?;
        let current_page = to_index(current_page, "current page")?;
        let range_size = to_index(range_size, "range size")?;
        let window = compute_window(current_page, page_count, range_size)?;
        Ok(WindowBuffer::encode(&window, current_page, page_count))
    };
    run().map_err(js_error)
}

/// Resolve a control id (`first`, `prev`, `next`, `last`, `select`) to a page
///
/// `target` is only read for `select`.
#[wasm_bindgen(js_name = nextPage)]
pub fn next_page_js(
    control: &str,
    current_page: i32,
    page_count: i32,
    target: i32,
) -> std::result::Result<u32, JsValue> {
    let run = || -> Result<u32> {
        let intent = parse_intent(control, target)?;
        let page = next_page(
            intent,
            to_index(current_page, "current page")?,
            to_index(page_count, "page count")?,
        )?;
        Ok(page as u32)
    };
    run().map_err(js_error)
}

/// WASM-exposed pagination control state
#[wasm_bindgen]
pub struct WasmPagination {
    state: PaginationState,
    config: PaginationConfig,
    sizer: RangeSizer,
    buffer: WindowBuffer,
}

impl WasmPagination {
    fn from_parts(items_count: usize, config: PaginationConfig) -> Result<Self> {
        let state = config.state_for(items_count)?;
        let sizer = RangeSizer::new(config.range, ItemMetrics::default())?;
        Ok(Self {
            state,
            config,
            sizer,
            buffer: WindowBuffer::new(),
        })
    }

    fn update_items_per_page(&mut self, items_per_page: i32) -> Result<()> {
        let items_per_page = to_index(items_per_page, "items per page")?;
        self.state.set_page_size(items_per_page)?;
        self.config.items_per_page = items_per_page;
        Ok(())
    }

    fn update_range(&mut self, range: i32) -> Result<()> {
        let range = to_index(range, "range")?;
        self.sizer.set_intended(range)?;
        self.state.set_range_size(self.sizer.effective())?;
        self.config.range = range;
        Ok(())
    }

    fn commit(&mut self, intent: NavigationIntent) -> Result<Option<u32>> {
        Ok(self
            .state
            .apply(intent)?
            .map(|PageChanged { page }| page as u32))
    }
}

#[wasm_bindgen]
impl WasmPagination {
    /// Create a control with all buttons visible
    #[wasm_bindgen(constructor)]
    pub fn new(
        items_count: i32,
        items_per_page: i32,
        range: i32,
    ) -> std::result::Result<WasmPagination, JsValue> {
        let run = || -> Result<Self> {
            let config = PaginationConfig {
                items_per_page: to_index(items_per_page, "items per page")?,
                range: to_index(range, "range")?,
                ..Default::default()
            };
            Self::from_parts(to_index(items_count, "items count")?, config)
        };
        run().map_err(js_error)
    }

    /// Create a control from a JSON configuration
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(
        items_count: i32,
        json: &str,
    ) -> std::result::Result<WasmPagination, JsValue> {
        let run = || -> Result<Self> {
            let config = PaginationConfig::from_json(json)?;
            Self::from_parts(to_index(items_count, "items count")?, config)
        };
        run().map_err(js_error)
    }

    /// Apply a button press; returns the new page, or undefined if unchanged
    pub fn navigate(&mut self, control: &str) -> std::result::Result<Option<u32>, JsValue> {
        let intent = control.parse().map_err(js_error)?;
        self.commit(intent).map_err(js_error)
    }

    /// Select a page directly; returns the new page, or undefined if unchanged
    #[wasm_bindgen(js_name = selectPage)]
    pub fn select_page(&mut self, page: i32) -> std::result::Result<Option<u32>, JsValue> {
        let page = to_index(page, "page").map_err(js_error)?;
        self.commit(NavigationIntent::SelectPage(page)).map_err(js_error)
    }

    #[wasm_bindgen(js_name = setItemsCount)]
    pub fn set_items_count(&mut self, items_count: i32) -> std::result::Result<(), JsValue> {
        let items_count = to_index(items_count, "items count").map_err(js_error)?;
        self.state.set_total_items(items_count);
        Ok(())
    }

    #[wasm_bindgen(js_name = setItemsPerPage)]
    pub fn set_items_per_page(&mut self, items_per_page: i32) -> std::result::Result<(), JsValue> {
        self.update_items_per_page(items_per_page).map_err(js_error)
    }

    /// Set the intended range size; a narrow container may still shrink it
    #[wasm_bindgen(js_name = setRange)]
    pub fn set_range(&mut self, range: i32) -> std::result::Result<(), JsValue> {
        self.update_range(range).map_err(js_error)
    }

    /// Override the per-button width estimates used by `resize`
    #[wasm_bindgen(js_name = setItemMetrics)]
    pub fn set_item_metrics(
        &mut self,
        item_width: f32,
        reserved_width: f32,
    ) -> std::result::Result<(), JsValue> {
        self.sizer.set_metrics(ItemMetrics::new(item_width, reserved_width));
        self.state
            .set_range_size(self.sizer.effective())
            .map_err(js_error)
    }

    /// Refit the range size to the container width; returns the size in use
    pub fn resize(&mut self, width: f32) -> std::result::Result<u32, JsValue> {
        let range = self.sizer.fit(width);
        self.state.set_range_size(range).map_err(js_error)?;
        Ok(range as u32)
    }

    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&self) -> u32 {
        self.state.page_count() as u32
    }

    #[wasm_bindgen(js_name = getCurrentPage)]
    pub fn get_current_page(&self) -> u32 {
        self.state.current_page() as u32
    }

    #[wasm_bindgen(js_name = getRangeSize)]
    pub fn get_range_size(&self) -> u32 {
        self.state.range_size() as u32
    }

    /// Visible window as a flat buffer (see [`flat_buffer`])
    #[wasm_bindgen(js_name = getWindowBuffer)]
    pub fn get_window_buffer(&mut self) -> std::result::Result<Vec<u32>, JsValue> {
        let window = self.state.window().map_err(js_error)?;
        self.buffer
            .write(&window, self.state.current_page(), self.state.page_count());
        Ok(self.buffer.data.clone())
    }

    /// Full control strip as JSON
    #[wasm_bindgen(js_name = getControlsJson)]
    pub fn get_controls_json(&self) -> std::result::Result<String, JsValue> {
        ControlStrip::build(&self.state, &self.config)
            .and_then(|strip| strip.to_json())
            .map_err(js_error)
    }
}
