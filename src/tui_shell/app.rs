use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::catalog::{CatalogEvent, CatalogStore, CatalogTasks, Notice, NoticeLevel};
use crate::model::{RemoteConfig, load_config};
use crate::remote::CatalogClient;

use super::modal;
use super::views;
use super::{Input, Modal, Route};

mod event_loop;
mod intents;
mod key_dispatch;
mod lifecycle;
mod render;
mod runtime;
mod state;
mod time_utils;
mod view_nav;

pub(super) use self::state::{App, Focus};
use self::time_utils::{fmt_ts_ui, now_ts};

pub(super) fn run(start_route: Option<String>) -> Result<()> {
    runtime::run(start_route)
}
