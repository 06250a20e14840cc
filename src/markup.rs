use crate::core::parallax::LayerKind;

// Inline SVG for orbit items and parallax strips.

/// Cartoon paw print: one big pad and four toe beans.
pub fn paw_svg(color: &str, size: f32) -> String {
    format!(
        concat!(
            "<svg viewBox='0 0 40 40' width='{s}' height='{s}' xmlns='http://www.w3.org/2000/svg' ",
            "role='img' aria-hidden='true' focusable='false'>",
            "<ellipse cx='20' cy='29' rx='10' ry='7.2' fill='{c}'/>",
            "<ellipse cx='9.5' cy='14' rx='3.3' ry='3.7' fill='{c}'/>",
            "<ellipse cx='30.5' cy='14' rx='3.3' ry='3.7' fill='{c}'/>",
            "<ellipse cx='16.5' cy='7.7' rx='2.8' ry='3.2' fill='{c}'/>",
            "<ellipse cx='23.5' cy='7.7' rx='2.8' ry='3.2' fill='{c}'/>",
            "</svg>"
        ),
        s = size,
        c = color
    )
}

pub fn layer_svg(kind: LayerKind) -> &'static str {
    match kind {
        LayerKind::Clouds => concat!(
            "<svg width='100%' height='100' viewBox='0 0 400 100' fill='none' xmlns='http://www.w3.org/2000/svg'>",
            "<ellipse cx='60' cy='60' rx='50' ry='28' fill='#fffbe0' opacity='0.7'/>",
            "<ellipse cx='120' cy='50' rx='32' ry='18' fill='#ffb6c1' opacity='0.5'/>",
            "<ellipse cx='200' cy='65' rx='44' ry='22' fill='#c1f7ff' opacity='0.6'/>",
            "<ellipse cx='300' cy='55' rx='36' ry='20' fill='#f7d6ff' opacity='0.55'/>",
            "<ellipse cx='370' cy='70' rx='22' ry='14' fill='#ffe066' opacity='0.4'/>",
            "</svg>"
        ),
        LayerKind::Hearts => concat!(
            "<svg width='100%' height='80' viewBox='0 0 400 80' fill='none' xmlns='http://www.w3.org/2000/svg'>",
            "<path d='M40 40 Q40 20 60 20 Q80 20 80 40 Q80 60 60 72 Q40 60 40 40 Z' fill='#ff7eb9' opacity='0.5'/>",
            "<path d='M180 30 Q180 10 200 10 Q220 10 220 30 Q220 50 200 62 Q180 50 180 30 Z' fill='#c1f7ff' opacity='0.4'/>",
            "<path d='M320 50 Q320 30 340 30 Q360 30 360 50 Q360 70 340 72 Q320 70 320 50 Z' fill='#ffe066' opacity='0.4'/>",
            "</svg>"
        ),
        LayerKind::Stars => concat!(
            "<svg width='100%' height='60' viewBox='0 0 400 60' fill='none' xmlns='http://www.w3.org/2000/svg'>",
            "<polygon points='50,30 55,45 70,45 58,54 62,68 50,58 38,68 42,54 30,45 45,45' fill='#fffbe0' opacity='0.7'/>",
            "<polygon points='200,20 204,32 216,32 206,40 210,52 200,44 190,52 194,40 184,32 196,32' fill='#ffb6c1' opacity='0.5'/>",
            "<polygon points='350,40 353,48 362,48 355,54 357,62 350,56 343,62 345,54 338,48 347,48' fill='#c1f7ff' opacity='0.6'/>",
            "</svg>"
        ),
    }
}
