//! Viewer state for displaying a decoded image
//!
//! Windowing and textures belong to whatever front end embeds this crate.
//! What lives here is the state such a front end needs: the display
//! configuration, the key and mouse bindings that change it, the exit hook,
//! and a CPU-side composition of the frame the configuration implies.

use ppm_core::format::constants::CHANNELS;
use ppm_core::ImageRecord;
use rayon::prelude::*;

/// Longest window title, in bytes
pub const MAX_TITLE_LEN: usize = 265;

/// Title used for records with no source name
const UNTITLED: &str = "untitled";

/// A single color channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Which channels are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMask {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl ChannelMask {
    pub const ALL: Self = Self {
        red: true,
        green: true,
        blue: true,
    };

    /// Show only `channel`
    pub const fn only(channel: Channel) -> Self {
        Self {
            red: matches!(channel, Channel::Red),
            green: matches!(channel, Channel::Green),
            blue: matches!(channel, Channel::Blue),
        }
    }

    /// Zero the hidden channels of one pixel
    pub fn apply(&self, [r, g, b]: [u8; 3]) -> [u8; 3] {
        [
            if self.red { r } else { 0 },
            if self.green { g } else { 0 },
            if self.blue { b } else { 0 },
        ]
    }
}

impl Default for ChannelMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Display configuration owned by the viewer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Flip the image vertically
    pub invert: bool,
    pub channels: ChannelMask,
}

impl ViewerConfig {
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_channels(mut self, channels: ChannelMask) -> Self {
        self.channels = channels;
        self
    }
}

/// What the front end should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The configuration changed; draw again
    Redraw,
    /// A bound key that left the configuration as it was
    Unchanged,
    /// The exit hook has run; shut down
    Exit,
    /// Not a bound key
    Ignored,
}

type ExitHook = Box<dyn FnMut() + Send>;

/// Viewer configuration plus the exit hook
#[derive(Default)]
pub struct ViewerState {
    config: ViewerConfig,
    exit_hook: Option<ExitHook>,
}

impl ViewerState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            exit_hook: None,
        }
    }

    /// Run `hook` once when the viewer is asked to quit
    pub fn with_exit_hook(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.exit_hook = Some(Box::new(hook));
        self
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Apply a key binding
    ///
    /// `q` quits, `i` toggles inversion, `r`/`g`/`b` isolate one channel and
    /// `o` shows all of them again. Case is ignored.
    pub fn handle_key(&mut self, key: char) -> KeyAction {
        let before = self.config;

        match key.to_ascii_lowercase() {
            'q' => return self.exit(),
            'i' => self.config.invert = !self.config.invert,
            'r' => self.config.channels = ChannelMask::only(Channel::Red),
            'g' => self.config.channels = ChannelMask::only(Channel::Green),
            'b' => self.config.channels = ChannelMask::only(Channel::Blue),
            'o' => self.config.channels = ChannelMask::ALL,
            _ => return KeyAction::Ignored,
        }

        if self.config != before {
            KeyAction::Redraw
        } else {
            KeyAction::Unchanged
        }
    }

    /// Any mouse button quits
    pub fn handle_mouse(&mut self) -> KeyAction {
        self.exit()
    }

    fn exit(&mut self) -> KeyAction {
        if let Some(mut hook) = self.exit_hook.take() {
            hook();
        }
        KeyAction::Exit
    }

    /// `"<source> - ppmview"`, cut to [`MAX_TITLE_LEN`] bytes
    pub fn window_title(&self, record: &ImageRecord) -> String {
        let name = record.source_name().unwrap_or(UNTITLED);
        let mut title = format!("{name} - ppmview");

        if title.len() > MAX_TITLE_LEN {
            let mut end = MAX_TITLE_LEN;
            while !title.is_char_boundary(end) {
                end -= 1;
            }
            title.truncate(end);
        }
        title
    }

    /// The frame the current configuration shows for `record`
    ///
    /// Always `width * height * 3` bytes. Hidden channels are zero, and so
    /// is anything a partial record is missing. Rows are composed in
    /// parallel.
    pub fn compose_frame(&self, record: &ImageRecord) -> Vec<u8> {
        let row_len = record.width() as usize * CHANNELS;
        let rows = record.height() as usize;
        let mut frame = vec![0u8; record.expected_len()];
        if row_len == 0 {
            return frame;
        }

        let pixels = record.pixels();
        let ViewerConfig { invert, channels } = self.config;

        frame
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, out)| {
                let src_row = if invert { rows - 1 - y } else { y };
                let start = (src_row * row_len).min(pixels.len());
                let end = (start + row_len).min(pixels.len());
                let src = &pixels[start..end];

                // A trailing incomplete pixel counts as missing
                let whole = src.len() - src.len() % CHANNELS;
                let src: &[[u8; 3]] = bytemuck::cast_slice(&src[..whole]);
                let out: &mut [[u8; 3]] = bytemuck::cast_slice_mut(out);

                for (dst, &px) in out.iter_mut().zip(src) {
                    *dst = channels.apply(px);
                }
            });

        frame
    }
}

impl std::fmt::Debug for ViewerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerState")
            .field("config", &self.config)
            .field("exit_hook", &self.exit_hook.is_some())
            .finish()
    }
}
