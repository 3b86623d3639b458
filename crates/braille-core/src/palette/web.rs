//! CSS named colors.

use crate::color::Color;

/// The CSS named colors, in alphabetical order.
///
/// Spelling variants (`gray`/`grey`, `cyan`/`aqua`, `magenta`/`fuchsia`)
/// share a value; nearest-color search keeps the first, so the
/// alphabetically earlier name is the one emitted.
pub static WEB_COLORS: [(&str, Color); 148] = [
    ("aliceblue", Color::new(0xf0, 0xf8, 0xff)),
    ("antiquewhite", Color::new(0xfa, 0xeb, 0xd7)),
    ("aqua", Color::new(0x00, 0xff, 0xff)),
    ("aquamarine", Color::new(0x7f, 0xff, 0xd4)),
    ("azure", Color::new(0xf0, 0xff, 0xff)),
    ("beige", Color::new(0xf5, 0xf5, 0xdc)),
    ("bisque", Color::new(0xff, 0xe4, 0xc4)),
    ("black", Color::new(0x00, 0x00, 0x00)),
    ("blanchedalmond", Color::new(0xff, 0xeb, 0xcd)),
    ("blue", Color::new(0x00, 0x00, 0xff)),
    ("blueviolet", Color::new(0x8a, 0x2b, 0xe2)),
    ("brown", Color::new(0xa5, 0x2a, 0x2a)),
    ("burlywood", Color::new(0xde, 0xb8, 0x87)),
    ("cadetblue", Color::new(0x5f, 0x9e, 0xa0)),
    ("chartreuse", Color::new(0x7f, 0xff, 0x00)),
    ("chocolate", Color::new(0xd2, 0x69, 0x1e)),
    ("coral", Color::new(0xff, 0x7f, 0x50)),
    ("cornflowerblue", Color::new(0x64, 0x95, 0xed)),
    ("cornsilk", Color::new(0xff, 0xf8, 0xdc)),
    ("crimson", Color::new(0xdc, 0x14, 0x3c)),
    ("cyan", Color::new(0x00, 0xff, 0xff)),
    ("darkblue", Color::new(0x00, 0x00, 0x8b)),
    ("darkcyan", Color::new(0x00, 0x8b, 0x8b)),
    ("darkgoldenrod", Color::new(0xb8, 0x86, 0x0b)),
    ("darkgray", Color::new(0xa9, 0xa9, 0xa9)),
    ("darkgreen", Color::new(0x00, 0x64, 0x00)),
    ("darkgrey", Color::new(0xa9, 0xa9, 0xa9)),
    ("darkkhaki", Color::new(0xbd, 0xb7, 0x6b)),
    ("darkmagenta", Color::new(0x8b, 0x00, 0x8b)),
    ("darkolivegreen", Color::new(0x55, 0x6b, 0x2f)),
    ("darkorange", Color::new(0xff, 0x8c, 0x00)),
    ("darkorchid", Color::new(0x99, 0x32, 0xcc)),
    ("darkred", Color::new(0x8b, 0x00, 0x00)),
    ("darksalmon", Color::new(0xe9, 0x96, 0x7a)),
    ("darkseagreen", Color::new(0x8f, 0xbc, 0x8f)),
    ("darkslateblue", Color::new(0x48, 0x3d, 0x8b)),
    ("darkslategray", Color::new(0x2f, 0x4f, 0x4f)),
    ("darkslategrey", Color::new(0x2f, 0x4f, 0x4f)),
    ("darkturquoise", Color::new(0x00, 0xce, 0xd1)),
    ("darkviolet", Color::new(0x94, 0x00, 0xd3)),
    ("deeppink", Color::new(0xff, 0x14, 0x93)),
    ("deepskyblue", Color::new(0x00, 0xbf, 0xff)),
    ("dimgray", Color::new(0x69, 0x69, 0x69)),
    ("dimgrey", Color::new(0x69, 0x69, 0x69)),
    ("dodgerblue", Color::new(0x1e, 0x90, 0xff)),
    ("firebrick", Color::new(0xb2, 0x22, 0x22)),
    ("floralwhite", Color::new(0xff, 0xfa, 0xf0)),
    ("forestgreen", Color::new(0x22, 0x8b, 0x22)),
    ("fuchsia", Color::new(0xff, 0x00, 0xff)),
    ("gainsboro", Color::new(0xdc, 0xdc, 0xdc)),
    ("ghostwhite", Color::new(0xf8, 0xf8, 0xff)),
    ("gold", Color::new(0xff, 0xd7, 0x00)),
    ("goldenrod", Color::new(0xda, 0xa5, 0x20)),
    ("gray", Color::new(0x80, 0x80, 0x80)),
    ("green", Color::new(0x00, 0x80, 0x00)),
    ("greenyellow", Color::new(0xad, 0xff, 0x2f)),
    ("grey", Color::new(0x80, 0x80, 0x80)),
    ("honeydew", Color::new(0xf0, 0xff, 0xf0)),
    ("hotpink", Color::new(0xff, 0x69, 0xb4)),
    ("indianred", Color::new(0xcd, 0x5c, 0x5c)),
    ("indigo", Color::new(0x4b, 0x00, 0x82)),
    ("ivory", Color::new(0xff, 0xff, 0xf0)),
    ("khaki", Color::new(0xf0, 0xe6, 0x8c)),
    ("lavender", Color::new(0xe6, 0xe6, 0xfa)),
    ("lavenderblush", Color::new(0xff, 0xf0, 0xf5)),
    ("lawngreen", Color::new(0x7c, 0xfc, 0x00)),
    ("lemonchiffon", Color::new(0xff, 0xfa, 0xcd)),
    ("lightblue", Color::new(0xad, 0xd8, 0xe6)),
    ("lightcoral", Color::new(0xf0, 0x80, 0x80)),
    ("lightcyan", Color::new(0xe0, 0xff, 0xff)),
    ("lightgoldenrodyellow", Color::new(0xfa, 0xfa, 0xd2)),
    ("lightgray", Color::new(0xd3, 0xd3, 0xd3)),
    ("lightgreen", Color::new(0x90, 0xee, 0x90)),
    ("lightgrey", Color::new(0xd3, 0xd3, 0xd3)),
    ("lightpink", Color::new(0xff, 0xb6, 0xc1)),
    ("lightsalmon", Color::new(0xff, 0xa0, 0x7a)),
    ("lightseagreen", Color::new(0x20, 0xb2, 0xaa)),
    ("lightskyblue", Color::new(0x87, 0xce, 0xfa)),
    ("lightslategray", Color::new(0x77, 0x88, 0x99)),
    ("lightslategrey", Color::new(0x77, 0x88, 0x99)),
    ("lightsteelblue", Color::new(0xb0, 0xc4, 0xde)),
    ("lightyellow", Color::new(0xff, 0xff, 0xe0)),
    ("lime", Color::new(0x00, 0xff, 0x00)),
    ("limegreen", Color::new(0x32, 0xcd, 0x32)),
    ("linen", Color::new(0xfa, 0xf0, 0xe6)),
    ("magenta", Color::new(0xff, 0x00, 0xff)),
    ("maroon", Color::new(0x80, 0x00, 0x00)),
    ("mediumaquamarine", Color::new(0x66, 0xcd, 0xaa)),
    ("mediumblue", Color::new(0x00, 0x00, 0xcd)),
    ("mediumorchid", Color::new(0xba, 0x55, 0xd3)),
    ("mediumpurple", Color::new(0x93, 0x70, 0xdb)),
    ("mediumseagreen", Color::new(0x3c, 0xb3, 0x71)),
    ("mediumslateblue", Color::new(0x7b, 0x68, 0xee)),
    ("mediumspringgreen", Color::new(0x00, 0xfa, 0x9a)),
    ("mediumturquoise", Color::new(0x48, 0xd1, 0xcc)),
    ("mediumvioletred", Color::new(0xc7, 0x15, 0x85)),
    ("midnightblue", Color::new(0x19, 0x19, 0x70)),
    ("mintcream", Color::new(0xf5, 0xff, 0xfa)),
    ("mistyrose", Color::new(0xff, 0xe4, 0xe1)),
    ("moccasin", Color::new(0xff, 0xe4, 0xb5)),
    ("navajowhite", Color::new(0xff, 0xde, 0xad)),
    ("navy", Color::new(0x00, 0x00, 0x80)),
    ("oldlace", Color::new(0xfd, 0xf5, 0xe6)),
    ("olive", Color::new(0x80, 0x80, 0x00)),
    ("olivedrab", Color::new(0x6b, 0x8e, 0x23)),
    ("orange", Color::new(0xff, 0xa5, 0x00)),
    ("orangered", Color::new(0xff, 0x45, 0x00)),
    ("orchid", Color::new(0xda, 0x70, 0xd6)),
    ("palegoldenrod", Color::new(0xee, 0xe8, 0xaa)),
    ("palegreen", Color::new(0x98, 0xfb, 0x98)),
    ("paleturquoise", Color::new(0xaf, 0xee, 0xee)),
    ("palevioletred", Color::new(0xdb, 0x70, 0x93)),
    ("papayawhip", Color::new(0xff, 0xef, 0xd5)),
    ("peachpuff", Color::new(0xff, 0xda, 0xb9)),
    ("peru", Color::new(0xcd, 0x85, 0x3f)),
    ("pink", Color::new(0xff, 0xc0, 0xcb)),
    ("plum", Color::new(0xdd, 0xa0, 0xdd)),
    ("powderblue", Color::new(0xb0, 0xe0, 0xe6)),
    ("purple", Color::new(0x80, 0x00, 0x80)),
    ("rebeccapurple", Color::new(0x66, 0x33, 0x99)),
    ("red", Color::new(0xff, 0x00, 0x00)),
    ("rosybrown", Color::new(0xbc, 0x8f, 0x8f)),
    ("royalblue", Color::new(0x41, 0x69, 0xe1)),
    ("saddlebrown", Color::new(0x8b, 0x45, 0x13)),
    ("salmon", Color::new(0xfa, 0x80, 0x72)),
    ("sandybrown", Color::new(0xf4, 0xa4, 0x60)),
    ("seagreen", Color::new(0x2e, 0x8b, 0x57)),
    ("seashell", Color::new(0xff, 0xf5, 0xee)),
    ("sienna", Color::new(0xa0, 0x52, 0x2d)),
    ("silver", Color::new(0xc0, 0xc0, 0xc0)),
    ("skyblue", Color::new(0x87, 0xce, 0xeb)),
    ("slateblue", Color::new(0x6a, 0x5a, 0xcd)),
    ("slategray", Color::new(0x70, 0x80, 0x90)),
    ("slategrey", Color::new(0x70, 0x80, 0x90)),
    ("snow", Color::new(0xff, 0xfa, 0xfa)),
    ("springgreen", Color::new(0x00, 0xff, 0x7f)),
    ("steelblue", Color::new(0x46, 0x82, 0xb4)),
    ("tan", Color::new(0xd2, 0xb4, 0x8c)),
    ("teal", Color::new(0x00, 0x80, 0x80)),
    ("thistle", Color::new(0xd8, 0xbf, 0xd8)),
    ("tomato", Color::new(0xff, 0x63, 0x47)),
    ("turquoise", Color::new(0x40, 0xe0, 0xd0)),
    ("violet", Color::new(0xee, 0x82, 0xee)),
    ("wheat", Color::new(0xf5, 0xde, 0xb3)),
    ("white", Color::new(0xff, 0xff, 0xff)),
    ("whitesmoke", Color::new(0xf5, 0xf5, 0xf5)),
    ("yellow", Color::new(0xff, 0xff, 0x00)),
    ("yellowgreen", Color::new(0x9a, 0xcd, 0x32)),
];
