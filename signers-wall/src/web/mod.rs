//! Browser shell: mounts the wall into the page, wires DOM events into the
//! runtime, and exposes a small script API.

mod config;
mod dom;
mod fetch;
mod host;
mod input;

use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use self::dom::Shell;
use self::host::DomHost;
use crate::core::logging::init_logger;
use crate::runtime::{
    LoadTicket, WallCommand, WallConfig, WallRuntime, prepare_loaded,
};

pub(crate) struct WallApp {
    runtime: WallRuntime<DomHost>,
    host: DomHost,
}

pub(crate) type AppRef = Weak<RefCell<WallApp>>;

/// Single entry point from DOM callbacks into the runtime.
pub(crate) fn dispatch(app: &AppRef, command: WallCommand) -> bool {
    let Some(app) = app.upgrade() else {
        return false;
    };
    let Ok(mut app) = app.try_borrow_mut() else {
        warn!("Wall is busy; dropping {:?}", command);
        return false;
    };

    let WallApp { runtime, host } = &mut *app;
    runtime.on_command(command, host)
}

pub(crate) fn is_visible(app: &AppRef) -> bool {
    app.upgrade()
        .and_then(|app| app.try_borrow().ok().map(|app| app.runtime.is_visible()))
        .unwrap_or(false)
}

#[derive(Debug)]
pub enum MountError {
    NoDocument,
    InvalidSelector(String),
    TargetNotFound(String),
    Dom(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => f.write_str("no window/document available"),
            Self::InvalidSelector(selector) => {
                write!(f, "'{}' is not a valid selector", selector)
            }
            Self::TargetNotFound(selector) => {
                write!(f, "mount point '{}' not found", selector)
            }
            Self::Dom(message) => write!(f, "DOM error: {}", message),
        }
    }
}

impl Error for MountError {}

impl MountError {
    fn dom(err: JsValue) -> Self {
        Self::Dom(format!("{:?}", err))
    }
}

/// A mounted wall. Dropping the handle without calling `unmount` leaves the
/// markup in place but detaches every listener.
#[wasm_bindgen]
pub struct WallHandle {
    app: Rc<RefCell<WallApp>>,
    shell: Shell,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl WallHandle {
    pub fn open(&self) -> bool {
        self.send(WallCommand::Open)
    }

    pub fn close(&self) -> bool {
        self.send(WallCommand::Close)
    }

    pub fn toggle(&self) -> bool {
        self.send(WallCommand::Toggle)
    }

    /// Switches the data source, reloading and reshuffling the wall.
    #[wasm_bindgen(js_name = setCsvUrl)]
    pub fn set_csv_url(&self, url: String) {
        let ticket = match self.app.try_borrow_mut() {
            Ok(mut app) => app.runtime.set_csv_url(&url),
            Err(_) => {
                warn!("Wall is busy; ignoring csv url change to '{}'", url);
                return;
            }
        };
        spawn_load(&self.app, ticket);
    }

    pub fn unmount(&mut self) {
        self.listeners.clear();
        self.send(WallCommand::Unmount);
        self.shell.remove();
    }

    fn send(&self, command: WallCommand) -> bool {
        dispatch(&Rc::downgrade(&self.app), command)
    }
}

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<WallHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logger();

    let config = config::read_global_config();
    if !config.auto_mount {
        info!("autoMount disabled; waiting for mountWall()");
        return;
    }

    match mount(config) {
        Ok(handle) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(err) => error!("Failed to mount wall: {}", err),
    }
}

/// Returns `undefined` when the wall could not be mounted; the reason is
/// logged to the console.
#[wasm_bindgen(js_name = mountWall)]
pub fn mount_wall(config: JsValue) -> Option<WallHandle> {
    init_logger();
    mount(config::config_from_js(&config))
        .map_err(|err| error!("Failed to mount wall: {}", err))
        .ok()
}

/// Opens the auto-mounted overlay, e.g. from the host page's own button.
#[wasm_bindgen(js_name = openWall)]
pub fn open_wall() -> bool {
    with_auto_mounted(|handle| handle.open())
}

#[wasm_bindgen(js_name = closeWall)]
pub fn close_wall() -> bool {
    with_auto_mounted(|handle| handle.close())
}

fn with_auto_mounted(f: impl FnOnce(&WallHandle) -> bool) -> bool {
    AUTO_MOUNTED.with(|slot| match slot.borrow().as_ref() {
        Some(handle) => f(handle),
        None => {
            warn!("No auto-mounted wall");
            false
        }
    })
}

pub fn mount(config: WallConfig) -> Result<WallHandle, MountError> {
    let config = config.normalized();
    let window = web_sys::window().ok_or(MountError::NoDocument)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    let root = document
        .query_selector(&config.target_selector)
        .map_err(|_| MountError::InvalidSelector(config.target_selector.clone()))?
        .ok_or_else(|| MountError::TargetNotFound(config.target_selector.clone()))?;

    dom::inject_styles(&document).map_err(MountError::dom)?;
    let shell = dom::build_shell(&document, &root, &config).map_err(MountError::dom)?;

    let host_shell = shell.clone();
    let host_window = window.clone();
    let app = Rc::new_cyclic(|weak: &AppRef| {
        let mut host = DomHost::new(weak.clone(), host_window, document, host_shell);
        let runtime = WallRuntime::mount(config, &mut host);
        RefCell::new(WallApp { runtime, host })
    });

    let listeners = input::install(&Rc::downgrade(&app), &window, &shell);

    let ticket = app.borrow_mut().runtime.begin_load();
    spawn_load(&app, ticket);

    Ok(WallHandle {
        app,
        shell,
        listeners,
    })
}

fn spawn_load(app: &Rc<RefCell<WallApp>>, ticket: LoadTicket) {
    let (url, repeat) = {
        let app = app.borrow();
        let config = app.runtime.config();
        (config.csv_url.clone(), config.repeat)
    };
    let target = Rc::downgrade(app);

    spawn_local(async move {
        let fetched = fetch::fetch_text(&url).await;
        let mut rng = fetch::fresh_rng();
        let names = prepare_loaded(&url, fetched, repeat, &mut rng);
        dispatch(&target, WallCommand::NamesLoaded(ticket, names));
    });
}
