// staticmap.rs
//
// Builds Geoapify static map URLs for the map pin on the detail pane. The
// image itself is fetched by whoever renders it.

pub const STATIC_MAP_BASE: &str = "https://maps.geoapify.com/v1/staticmap";
pub const DEFAULT_ZOOM: f64 = 16.4226;
pub const DEFAULT_PITCH: u32 = 44;

/// Size of the inline map pin.
pub const THUMBNAIL_SIZE: u32 = 400;
/// Size used when the map is opened full screen.
pub const FULL_SIZE: u32 = 1024;
/// `"LON,LAT"` shown when a listing has no resolved location.
pub const DEFAULT_LONLAT: &str = "-74.005157,40.710785";

#[derive(Debug, Clone, PartialEq)]
pub struct StaticMapRequest<'a> {
    pub width: u32,
    pub height: u32,
    /// `"LON,LAT"`, passed through untouched.
    pub lonlat: &'a str,
    pub api_key: &'a str,
    pub zoom: f64,
    pub pitch: u32,
}

impl<'a> StaticMapRequest<'a> {
    pub fn new(width: u32, height: u32, lonlat: &'a str, api_key: &'a str) -> Self {
        Self {
            width,
            height,
            lonlat,
            api_key,
            zoom: DEFAULT_ZOOM,
            pitch: DEFAULT_PITCH,
        }
    }

    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn pitch(mut self, pitch: u32) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn to_url(&self) -> String {
        format!(
            "{base}?style=osm-bright-grey\
             &width={w}&height={h}\
             &center=lonlat:{ll}\
             &zoom={zoom}&pitch={pitch}\
             &marker=lonlat:{ll};color:%23ff0000;size:medium\
             &apiKey={key}",
            base = STATIC_MAP_BASE,
            w = self.width,
            h = self.height,
            ll = self.lonlat,
            zoom = self.zoom,
            pitch = self.pitch,
            key = self.api_key,
        )
    }
}

/// Static map URL with the default zoom and pitch. Inputs are not validated.
pub fn static_map_url(width: u32, height: u32, lonlat: &str, api_key: &str) -> String {
    StaticMapRequest::new(width, height, lonlat, api_key).to_url()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_exact_url() {
        assert_eq!(
            static_map_url(400, 400, "-74.005157,40.710785", "KEY"),
            "https://maps.geoapify.com/v1/staticmap?style=osm-bright-grey\
             &width=400&height=400\
             &center=lonlat:-74.005157,40.710785\
             &zoom=16.4226&pitch=44\
             &marker=lonlat:-74.005157,40.710785;color:%23ff0000;size:medium\
             &apiKey=KEY"
        );
    }

    #[test]
    fn overrides_zoom_and_pitch() {
        let url = StaticMapRequest::new(FULL_SIZE, FULL_SIZE, DEFAULT_LONLAT, "k")
            .zoom(12.5)
            .pitch(0)
            .to_url();
        assert!(url.contains("&width=1024&height=1024&"));
        assert!(url.contains("&zoom=12.5&pitch=0&"));
    }

    #[test]
    fn passes_garbage_through() {
        let url = static_map_url(0, 0, "not,coords", "");
        assert!(url.contains("center=lonlat:not,coords&"));
        assert!(url.ends_with("&apiKey="));
    }
}
