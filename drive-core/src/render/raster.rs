use glam::DVec2;

pub type Rgba = [u8; 4];

/// Clipped RGBA8 drawing surface over a borrowed pixel buffer.
pub struct Canvas<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let i = self.offset(x, y)?;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn clear(&mut self, rgba: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    #[inline]
    pub fn put(&mut self, x: i32, y: i32, rgba: Rgba) {
        if let Some(i) = self.offset(x, y) {
            if let Some(px) = self.pixels.get_mut(i..i + 4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y * self.width + x) * 4) as usize)
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, rgba: Rgba) {
        let r_sq = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r_sq {
                    self.put(cx + dx, cy + dy, rgba);
                }
            }
        }
    }

    /// Circle outline growing inward from `radius` by `stroke` pixels.
    pub fn ring(&mut self, cx: i32, cy: i32, radius: i32, stroke: i32, rgba: Rgba) {
        let outer_sq = radius * radius;
        let inner = (radius - stroke).max(0);
        let inner_sq = inner * inner;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d_sq = dx * dx + dy * dy;
                if d_sq <= outer_sq && d_sq > inner_sq {
                    self.put(cx + dx, cy + dy, rgba);
                }
            }
        }
    }

    /// Bresenham line stamped with a disc so strokes keep their width on diagonals.
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), stroke: i32, rgba: Rgba) {
        let (mut x0, mut y0) = from;
        let (x1, y1) = to;
        let half = (stroke - 1).max(0) / 2;

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            if half == 0 {
                self.put(x0, y0, rgba);
            } else {
                self.fill_circle(x0, y0, half, rgba);
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Fills a convex polygon given in either winding order.
    pub fn fill_convex(&mut self, corners: &[DVec2], rgba: Rgba) {
        if corners.len() < 3 {
            return;
        }
        let (min, max) = corners.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(min, max), corner| (min.min(*corner), max.max(*corner)),
        );
        let x_range = (min.x.floor() as i32).max(0)..=(max.x.ceil() as i32).min(self.width as i32 - 1);
        let y_range = (min.y.floor() as i32).max(0)..=(max.y.ceil() as i32).min(self.height as i32 - 1);

        for y in y_range {
            for x in x_range.clone() {
                let p = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                if contains_convex(corners, p) {
                    self.put(x, y, rgba);
                }
            }
        }
    }
}

fn contains_convex(corners: &[DVec2], p: DVec2) -> bool {
    let mut sign = 0.0f64;
    for (i, a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % corners.len()];
        let cross = (b - *a).perp_dot(p - *a);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}
