//! Male scoring charts, chart version 0 (provisional September 2025).
//!
//! Rows are `row(threshold, points_in_tenths)`, best performance first.

use super::{BracketCharts, Chart, ScoreRow, row};

pub(super) static AGE_U25: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_U25),
    hamr: Chart::Table(HAMR_U25),
    walk_2km: Chart::Table(WALK_2KM_U25),
    pushups: Chart::Table(PUSHUPS_U25),
    hand_release_pushups: Chart::Table(HRPU_U25),
    situps: Chart::Table(SITUPS_U25),
    cross_leg_reverse_crunch: Chart::Table(CLRC_U25),
    plank: Chart::Table(PLANK_U25),
};

pub(super) static AGE_25_29: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_25_29),
    hamr: Chart::Table(HAMR_25_29),
    walk_2km: Chart::Table(WALK_2KM_25_29),
    pushups: Chart::Table(PUSHUPS_25_29),
    hand_release_pushups: Chart::Table(HRPU_25_29),
    situps: Chart::Table(SITUPS_25_29),
    cross_leg_reverse_crunch: Chart::Table(CLRC_25_29),
    plank: Chart::Table(PLANK_25_29),
};

pub(super) static AGE_30_34: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_30_34),
    hamr: Chart::Table(HAMR_30_34),
    walk_2km: Chart::Table(WALK_2KM_30_34),
    pushups: Chart::Table(PUSHUPS_30_34),
    hand_release_pushups: Chart::Table(HRPU_30_34),
    situps: Chart::Table(SITUPS_30_34),
    cross_leg_reverse_crunch: Chart::Table(CLRC_30_34),
    plank: Chart::Table(PLANK_30_34),
};

pub(super) static AGE_35_39: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_35_39),
    hamr: Chart::Table(HAMR_35_39),
    walk_2km: Chart::Table(WALK_2KM_35_39),
    pushups: Chart::Table(PUSHUPS_35_39),
    hand_release_pushups: Chart::Table(HRPU_35_39),
    situps: Chart::Table(SITUPS_35_39),
    cross_leg_reverse_crunch: Chart::Table(CLRC_35_39),
    plank: Chart::Table(PLANK_35_39),
};

pub(super) static AGE_40_44: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_40_44),
    hamr: Chart::Table(HAMR_40_44),
    walk_2km: Chart::Table(WALK_2KM_40_44),
    pushups: Chart::Table(PUSHUPS_40_44),
    hand_release_pushups: Chart::Table(HRPU_40_44),
    situps: Chart::Table(SITUPS_40_44),
    cross_leg_reverse_crunch: Chart::Table(CLRC_40_44),
    plank: Chart::Table(PLANK_40_44),
};

pub(super) static AGE_45_49: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_45_49),
    hamr: Chart::Table(HAMR_45_49),
    walk_2km: Chart::Table(WALK_2KM_45_49),
    pushups: Chart::Table(PUSHUPS_45_49),
    hand_release_pushups: Chart::Table(HRPU_45_49),
    situps: Chart::Table(SITUPS_45_49),
    cross_leg_reverse_crunch: Chart::Table(CLRC_45_49),
    plank: Chart::Table(PLANK_45_49),
};

pub(super) static AGE_50_54: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_50_54),
    hamr: Chart::Table(HAMR_50_54),
    walk_2km: Chart::Table(WALK_2KM_50_54),
    pushups: Chart::Table(PUSHUPS_50_54),
    hand_release_pushups: Chart::Table(HRPU_50_54),
    situps: Chart::Table(SITUPS_50_54),
    cross_leg_reverse_crunch: Chart::Table(CLRC_50_54),
    plank: Chart::Table(PLANK_50_54),
};

pub(super) static AGE_55_59: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_55_59),
    hamr: Chart::Table(HAMR_55_59),
    walk_2km: Chart::Table(WALK_2KM_55_59),
    pushups: Chart::Table(PUSHUPS_55_59),
    hand_release_pushups: Chart::Table(HRPU_55_59),
    situps: Chart::Table(SITUPS_55_59),
    cross_leg_reverse_crunch: Chart::Table(CLRC_55_59),
    plank: Chart::Table(PLANK_55_59),
};

pub(super) static AGE_60_PLUS: BracketCharts = BracketCharts {
    run_2mile: Chart::Table(RUN_2MILE_60_PLUS),
    hamr: Chart::Table(HAMR_60_PLUS),
    walk_2km: Chart::Table(WALK_2KM_60_PLUS),
    pushups: Chart::Table(PUSHUPS_60_PLUS),
    hand_release_pushups: Chart::Table(HRPU_60_PLUS),
    situps: Chart::Table(SITUPS_60_PLUS),
    cross_leg_reverse_crunch: Chart::Table(CLRC_60_PLUS),
    plank: Chart::Table(PLANK_60_PLUS),
};

// <25

const RUN_2MILE_U25: &[ScoreRow] = &[
    row(792, 500), row(807, 488), row(822, 475), row(837, 463), row(852, 450), row(867, 438),
    row(882, 425), row(897, 413), row(912, 400), row(927, 388), row(942, 375), row(957, 363),
    row(972, 350), row(987, 338), row(1002, 325), row(1017, 313), row(1032, 300), row(1062, 266),
    row(1092, 231), row(1122, 197), row(1152, 163), row(1182, 128), row(1212, 94), row(1242, 59),
    row(1272, 25),
];

const HAMR_U25: &[ScoreRow] = &[
    row(100, 500), row(98, 491), row(96, 482), row(94, 473), row(92, 464), row(90, 455),
    row(88, 445), row(86, 436), row(84, 427), row(82, 418), row(80, 409), row(78, 400),
    row(76, 391), row(74, 382), row(72, 373), row(70, 364), row(68, 355), row(66, 345),
    row(64, 336), row(62, 327), row(60, 318), row(58, 309), row(56, 300), row(54, 279),
    row(52, 258), row(50, 237), row(48, 215), row(46, 194), row(44, 173), row(42, 152),
    row(40, 131), row(38, 110), row(36, 88), row(34, 67), row(32, 46), row(30, 25),
];

const WALK_2KM_U25: &[ScoreRow] = &[
    row(990, 500), row(1005, 488), row(1020, 475), row(1035, 463), row(1050, 450), row(1065, 438),
    row(1080, 425), row(1095, 413), row(1110, 400), row(1125, 388), row(1140, 375), row(1155, 363),
    row(1170, 350), row(1185, 338), row(1200, 325), row(1215, 313), row(1230, 300), row(1260, 254),
    row(1290, 208), row(1320, 163), row(1350, 117), row(1380, 71), row(1410, 25),
];

const PUSHUPS_U25: &[ScoreRow] = &[
    row(62, 150), row(60, 145), row(58, 141), row(56, 136), row(54, 132), row(52, 127),
    row(50, 122), row(48, 118), row(46, 113), row(44, 108), row(42, 104), row(40, 99),
    row(38, 95), row(36, 90), row(35, 85), row(34, 80), row(33, 75), row(32, 70),
    row(31, 64), row(30, 59), row(29, 54), row(28, 49), row(27, 44), row(26, 39),
    row(25, 34), row(24, 29), row(23, 23), row(22, 18), row(21, 13), row(20, 8),
];

const HRPU_U25: &[ScoreRow] = &[
    row(50, 150), row(48, 144), row(46, 138), row(44, 132), row(42, 126), row(40, 120),
    row(38, 114), row(36, 108), row(34, 102), row(32, 96), row(30, 90), row(29, 84),
    row(28, 78), row(27, 72), row(26, 67), row(25, 61), row(24, 55), row(23, 49),
    row(22, 43), row(21, 37), row(20, 31), row(19, 26), row(18, 20), row(17, 14),
    row(16, 8),
];

const SITUPS_U25: &[ScoreRow] = &[
    row(58, 150), row(56, 144), row(54, 138), row(52, 132), row(50, 126), row(48, 120),
    row(46, 114), row(44, 108), row(42, 102), row(40, 96), row(38, 90), row(37, 84),
    row(36, 78), row(35, 72), row(34, 67), row(33, 61), row(32, 55), row(31, 49),
    row(30, 43), row(29, 37), row(28, 31), row(27, 26), row(26, 20), row(25, 14),
    row(24, 8),
];

const CLRC_U25: &[ScoreRow] = &[
    row(56, 150), row(54, 144), row(52, 138), row(50, 132), row(48, 126), row(46, 120),
    row(44, 114), row(42, 108), row(40, 102), row(38, 96), row(36, 90), row(35, 84),
    row(34, 78), row(33, 72), row(32, 67), row(31, 61), row(30, 55), row(29, 49),
    row(28, 43), row(27, 37), row(26, 31), row(25, 26), row(24, 20), row(23, 14),
    row(22, 8),
];

const PLANK_U25: &[ScoreRow] = &[
    row(220, 150), row(210, 145), row(200, 140), row(190, 136), row(180, 131), row(170, 126),
    row(160, 121), row(150, 116), row(140, 112), row(130, 107), row(120, 102), row(110, 97),
    row(100, 92), row(95, 90), row(90, 82), row(85, 74), row(80, 65), row(75, 57),
    row(70, 49), row(65, 41), row(60, 33), row(55, 24), row(50, 16), row(45, 8),
];

// 25-29

const RUN_2MILE_25_29: &[ScoreRow] = &[
    row(810, 500), row(825, 488), row(840, 475), row(855, 463), row(870, 450), row(885, 438),
    row(900, 425), row(915, 413), row(930, 400), row(945, 388), row(960, 375), row(975, 363),
    row(990, 350), row(1005, 338), row(1020, 325), row(1035, 313), row(1050, 300), row(1080, 266),
    row(1110, 231), row(1140, 197), row(1170, 163), row(1200, 128), row(1230, 94), row(1260, 59),
    row(1290, 25),
];

const HAMR_25_29: &[ScoreRow] = &[
    row(95, 500), row(93, 491), row(91, 481), row(89, 472), row(87, 463), row(85, 453),
    row(83, 444), row(81, 435), row(79, 426), row(77, 416), row(75, 407), row(73, 398),
    row(71, 388), row(69, 379), row(67, 370), row(65, 360), row(63, 351), row(61, 342),
    row(59, 333), row(57, 323), row(55, 314), row(53, 305), row(52, 300), row(50, 277),
    row(48, 254), row(46, 231), row(44, 208), row(42, 185), row(40, 163), row(38, 140),
    row(36, 117), row(34, 94), row(32, 71), row(30, 48), row(28, 25),
];

const WALK_2KM_25_29: &[ScoreRow] = &[
    row(1010, 500), row(1025, 488), row(1040, 475), row(1055, 463), row(1070, 450), row(1085, 438),
    row(1100, 425), row(1115, 413), row(1130, 400), row(1145, 388), row(1160, 375), row(1175, 363),
    row(1190, 350), row(1205, 338), row(1220, 325), row(1235, 313), row(1250, 300), row(1280, 254),
    row(1310, 208), row(1340, 163), row(1370, 117), row(1400, 71), row(1430, 25),
];

const PUSHUPS_25_29: &[ScoreRow] = &[
    row(59, 150), row(57, 145), row(55, 140), row(53, 136), row(51, 131), row(49, 126),
    row(47, 121), row(45, 116), row(43, 112), row(41, 107), row(39, 102), row(37, 97),
    row(35, 92), row(34, 90), row(33, 85), row(32, 79), row(31, 74), row(30, 68),
    row(29, 63), row(28, 57), row(27, 52), row(26, 46), row(25, 41), row(24, 35),
    row(23, 30), row(22, 24), row(21, 19), row(20, 13), row(19, 8),
];

const HRPU_25_29: &[ScoreRow] = &[
    row(47, 150), row(45, 144), row(43, 137), row(41, 131), row(39, 125), row(37, 118),
    row(35, 112), row(33, 106), row(31, 99), row(29, 93), row(28, 90), row(27, 84),
    row(26, 77), row(25, 71), row(24, 65), row(23, 58), row(22, 52), row(21, 46),
    row(20, 40), row(19, 33), row(18, 27), row(17, 21), row(16, 14), row(15, 8),
];

const SITUPS_25_29: &[ScoreRow] = &[
    row(55, 150), row(53, 144), row(51, 137), row(49, 131), row(47, 125), row(45, 118),
    row(43, 112), row(41, 106), row(39, 99), row(37, 93), row(36, 90), row(35, 84),
    row(34, 77), row(33, 71), row(32, 65), row(31, 58), row(30, 52), row(29, 46),
    row(28, 40), row(27, 33), row(26, 27), row(25, 21), row(24, 14), row(23, 8),
];

const CLRC_25_29: &[ScoreRow] = &[
    row(53, 150), row(51, 144), row(49, 137), row(47, 131), row(45, 125), row(43, 118),
    row(41, 112), row(39, 106), row(37, 99), row(35, 93), row(34, 90), row(33, 84),
    row(32, 77), row(31, 71), row(30, 65), row(29, 58), row(28, 52), row(27, 46),
    row(26, 40), row(25, 33), row(24, 27), row(23, 21), row(22, 14), row(21, 8),
];

const PLANK_25_29: &[ScoreRow] = &[
    row(210, 150), row(200, 145), row(190, 140), row(180, 135), row(170, 130), row(160, 125),
    row(150, 120), row(140, 115), row(130, 110), row(120, 105), row(110, 100), row(100, 95),
    row(90, 90), row(85, 81), row(80, 73), row(75, 64), row(70, 56), row(65, 47),
    row(60, 39), row(55, 30), row(50, 22), row(45, 13), row(42, 8),
];

// 30-34

const RUN_2MILE_30_34: &[ScoreRow] = &[
    row(828, 500), row(843, 488), row(858, 475), row(873, 463), row(888, 450), row(903, 438),
    row(918, 425), row(933, 413), row(948, 400), row(963, 388), row(978, 375), row(993, 363),
    row(1008, 350), row(1023, 338), row(1038, 325), row(1053, 313), row(1068, 300), row(1098, 266),
    row(1128, 231), row(1158, 197), row(1188, 163), row(1218, 128), row(1248, 94), row(1278, 59),
    row(1308, 25),
];

const HAMR_30_34: &[ScoreRow] = &[
    row(90, 500), row(88, 490), row(86, 481), row(84, 471), row(82, 462), row(80, 452),
    row(78, 443), row(76, 433), row(74, 424), row(72, 414), row(70, 405), row(68, 395),
    row(66, 386), row(64, 376), row(62, 367), row(60, 357), row(58, 348), row(56, 338),
    row(54, 329), row(52, 319), row(50, 310), row(48, 300), row(46, 275), row(44, 250),
    row(42, 225), row(40, 200), row(38, 175), row(36, 150), row(34, 125), row(32, 100),
    row(30, 75), row(28, 50), row(26, 25),
];

const WALK_2KM_30_34: &[ScoreRow] = &[
    row(1030, 500), row(1045, 488), row(1060, 475), row(1075, 463), row(1090, 450), row(1105, 438),
    row(1120, 425), row(1135, 413), row(1150, 400), row(1165, 388), row(1180, 375), row(1195, 363),
    row(1210, 350), row(1225, 338), row(1240, 325), row(1255, 313), row(1270, 300), row(1300, 254),
    row(1330, 208), row(1360, 163), row(1390, 117), row(1420, 71), row(1450, 25),
];

const PUSHUPS_30_34: &[ScoreRow] = &[
    row(56, 150), row(54, 145), row(52, 140), row(50, 135), row(48, 130), row(46, 125),
    row(44, 120), row(42, 115), row(40, 110), row(38, 105), row(36, 100), row(34, 95),
    row(32, 90), row(31, 84), row(30, 78), row(29, 72), row(28, 67), row(27, 61),
    row(26, 55), row(25, 49), row(24, 43), row(23, 37), row(22, 31), row(21, 26),
    row(20, 20), row(19, 14), row(18, 8),
];

const HRPU_30_34: &[ScoreRow] = &[
    row(44, 150), row(42, 143), row(40, 137), row(38, 130), row(36, 123), row(34, 117),
    row(32, 110), row(30, 103), row(28, 97), row(26, 90), row(25, 83), row(24, 76),
    row(23, 70), row(22, 63), row(21, 56), row(20, 49), row(19, 42), row(18, 35),
    row(17, 29), row(16, 22), row(15, 15), row(14, 8),
];

const SITUPS_30_34: &[ScoreRow] = &[
    row(52, 150), row(50, 143), row(48, 137), row(46, 130), row(44, 123), row(42, 117),
    row(40, 110), row(38, 103), row(36, 97), row(34, 90), row(33, 83), row(32, 76),
    row(31, 70), row(30, 63), row(29, 56), row(28, 49), row(27, 42), row(26, 35),
    row(25, 29), row(24, 22), row(23, 15), row(22, 8),
];

const CLRC_30_34: &[ScoreRow] = &[
    row(50, 150), row(48, 143), row(46, 137), row(44, 130), row(42, 123), row(40, 117),
    row(38, 110), row(36, 103), row(34, 97), row(32, 90), row(31, 83), row(30, 76),
    row(29, 70), row(28, 63), row(27, 56), row(26, 49), row(25, 42), row(24, 35),
    row(23, 29), row(22, 22), row(21, 15), row(20, 8),
];

const PLANK_30_34: &[ScoreRow] = &[
    row(200, 150), row(190, 145), row(180, 140), row(170, 134), row(160, 129), row(150, 124),
    row(140, 119), row(130, 113), row(120, 108), row(110, 103), row(100, 98), row(90, 93),
    row(85, 90), row(80, 81), row(75, 72), row(70, 63), row(65, 54), row(60, 45),
    row(55, 37), row(50, 28), row(45, 19), row(40, 10), row(39, 8),
];

// 35-39

const RUN_2MILE_35_39: &[ScoreRow] = &[
    row(846, 500), row(861, 488), row(876, 475), row(891, 463), row(906, 450), row(921, 438),
    row(936, 425), row(951, 413), row(966, 400), row(981, 388), row(996, 375), row(1011, 363),
    row(1026, 350), row(1041, 338), row(1056, 325), row(1071, 313), row(1086, 300), row(1116, 266),
    row(1146, 231), row(1176, 197), row(1206, 163), row(1236, 128), row(1266, 94), row(1296, 59),
    row(1326, 25),
];

const HAMR_35_39: &[ScoreRow] = &[
    row(85, 500), row(83, 490), row(81, 480), row(79, 471), row(77, 461), row(75, 451),
    row(73, 441), row(71, 432), row(69, 422), row(67, 412), row(65, 402), row(63, 393),
    row(61, 383), row(59, 373), row(57, 363), row(55, 354), row(53, 344), row(51, 334),
    row(49, 324), row(47, 315), row(45, 305), row(44, 300), row(42, 273), row(40, 245),
    row(38, 218), row(36, 190), row(34, 163), row(32, 135), row(30, 108), row(28, 80),
    row(26, 53), row(24, 25),
];

const WALK_2KM_35_39: &[ScoreRow] = &[
    row(1050, 500), row(1065, 488), row(1080, 475), row(1095, 463), row(1110, 450), row(1125, 438),
    row(1140, 425), row(1155, 413), row(1170, 400), row(1185, 388), row(1200, 375), row(1215, 363),
    row(1230, 350), row(1245, 338), row(1260, 325), row(1275, 313), row(1290, 300), row(1320, 254),
    row(1350, 208), row(1380, 163), row(1410, 117), row(1440, 71), row(1470, 25),
];

const PUSHUPS_35_39: &[ScoreRow] = &[
    row(53, 150), row(51, 145), row(49, 140), row(47, 134), row(45, 129), row(43, 124),
    row(41, 119), row(39, 113), row(37, 108), row(35, 103), row(33, 98), row(31, 93),
    row(30, 90), row(29, 84), row(28, 77), row(27, 71), row(26, 65), row(25, 58),
    row(24, 52), row(23, 46), row(22, 40), row(21, 33), row(20, 27), row(19, 21),
    row(18, 14), row(17, 8),
];

const HRPU_35_39: &[ScoreRow] = &[
    row(41, 150), row(39, 143), row(37, 136), row(35, 129), row(33, 122), row(31, 115),
    row(29, 108), row(27, 101), row(25, 94), row(24, 90), row(23, 83), row(22, 75),
    row(21, 68), row(20, 60), row(19, 53), row(18, 45), row(17, 38), row(16, 30),
    row(15, 23), row(14, 15), row(13, 8),
];

const SITUPS_35_39: &[ScoreRow] = &[
    row(49, 150), row(47, 143), row(45, 136), row(43, 129), row(41, 122), row(39, 115),
    row(37, 108), row(35, 101), row(33, 94), row(32, 90), row(31, 83), row(30, 75),
    row(29, 68), row(28, 60), row(27, 53), row(26, 45), row(25, 38), row(24, 30),
    row(23, 23), row(22, 15), row(21, 8),
];

const CLRC_35_39: &[ScoreRow] = &[
    row(47, 150), row(45, 143), row(43, 136), row(41, 129), row(39, 122), row(37, 115),
    row(35, 108), row(33, 101), row(31, 94), row(30, 90), row(29, 83), row(28, 75),
    row(27, 68), row(26, 60), row(25, 53), row(24, 45), row(23, 38), row(22, 30),
    row(21, 23), row(20, 15), row(19, 8),
];

const PLANK_35_39: &[ScoreRow] = &[
    row(190, 150), row(180, 145), row(170, 139), row(160, 134), row(150, 128), row(140, 123),
    row(130, 117), row(120, 112), row(110, 106), row(100, 101), row(90, 95), row(80, 90),
    row(75, 81), row(70, 71), row(65, 62), row(60, 53), row(55, 43), row(50, 34),
    row(45, 25), row(40, 15), row(36, 8),
];

// 40-44

const RUN_2MILE_40_44: &[ScoreRow] = &[
    row(864, 500), row(879, 488), row(894, 475), row(909, 463), row(924, 450), row(939, 438),
    row(954, 425), row(969, 413), row(984, 400), row(999, 388), row(1014, 375), row(1029, 363),
    row(1044, 350), row(1059, 338), row(1074, 325), row(1089, 313), row(1104, 300), row(1134, 266),
    row(1164, 231), row(1194, 197), row(1224, 163), row(1254, 128), row(1284, 94), row(1314, 59),
    row(1344, 25),
];

const HAMR_40_44: &[ScoreRow] = &[
    row(80, 500), row(78, 490), row(76, 480), row(74, 470), row(72, 460), row(70, 450),
    row(68, 440), row(66, 430), row(64, 420), row(62, 410), row(60, 400), row(58, 390),
    row(56, 380), row(54, 370), row(52, 360), row(50, 350), row(48, 340), row(46, 330),
    row(44, 320), row(42, 310), row(40, 300), row(38, 269), row(36, 239), row(34, 208),
    row(32, 178), row(30, 147), row(28, 117), row(26, 86), row(24, 56), row(22, 25),
];

const WALK_2KM_40_44: &[ScoreRow] = &[
    row(1070, 500), row(1085, 488), row(1100, 475), row(1115, 463), row(1130, 450), row(1145, 438),
    row(1160, 425), row(1175, 413), row(1190, 400), row(1205, 388), row(1220, 375), row(1235, 363),
    row(1250, 350), row(1265, 338), row(1280, 325), row(1295, 313), row(1310, 300), row(1340, 254),
    row(1370, 208), row(1400, 163), row(1430, 117), row(1460, 71), row(1490, 25),
];

const PUSHUPS_40_44: &[ScoreRow] = &[
    row(50, 150), row(48, 145), row(46, 139), row(44, 134), row(42, 128), row(40, 123),
    row(38, 117), row(36, 112), row(34, 106), row(32, 101), row(30, 95), row(28, 90),
    row(27, 83), row(26, 76), row(25, 70), row(24, 63), row(23, 56), row(22, 49),
    row(21, 42), row(20, 35), row(19, 29), row(18, 22), row(17, 15), row(16, 8),
];

const HRPU_40_44: &[ScoreRow] = &[
    row(38, 150), row(36, 143), row(34, 135), row(32, 128), row(30, 120), row(28, 113),
    row(26, 105), row(24, 98), row(22, 90), row(21, 82), row(20, 74), row(19, 65),
    row(18, 57), row(17, 49), row(16, 41), row(15, 33), row(14, 24), row(13, 16),
    row(12, 8),
];

const SITUPS_40_44: &[ScoreRow] = &[
    row(46, 150), row(44, 143), row(42, 135), row(40, 128), row(38, 120), row(36, 113),
    row(34, 105), row(32, 98), row(30, 90), row(29, 82), row(28, 74), row(27, 65),
    row(26, 57), row(25, 49), row(24, 41), row(23, 33), row(22, 24), row(21, 16),
    row(20, 8),
];

const CLRC_40_44: &[ScoreRow] = &[
    row(44, 150), row(42, 143), row(40, 135), row(38, 128), row(36, 120), row(34, 113),
    row(32, 105), row(30, 98), row(28, 90), row(27, 82), row(26, 74), row(25, 65),
    row(24, 57), row(23, 49), row(22, 41), row(21, 33), row(20, 24), row(19, 16),
    row(18, 8),
];

const PLANK_40_44: &[ScoreRow] = &[
    row(180, 150), row(170, 144), row(160, 139), row(150, 133), row(140, 127), row(130, 121),
    row(120, 116), row(110, 110), row(100, 104), row(90, 99), row(80, 93), row(75, 90),
    row(70, 80), row(65, 70), row(60, 61), row(55, 51), row(50, 41), row(45, 31),
    row(40, 22), row(35, 12), row(33, 8),
];

// 45-49

const RUN_2MILE_45_49: &[ScoreRow] = &[
    row(882, 500), row(897, 488), row(912, 475), row(927, 463), row(942, 450), row(957, 438),
    row(972, 425), row(987, 413), row(1002, 400), row(1017, 388), row(1032, 375), row(1047, 363),
    row(1062, 350), row(1077, 338), row(1092, 325), row(1107, 313), row(1122, 300), row(1152, 266),
    row(1182, 231), row(1212, 197), row(1242, 163), row(1272, 128), row(1302, 94), row(1332, 59),
    row(1362, 25),
];

const HAMR_45_49: &[ScoreRow] = &[
    row(75, 500), row(73, 490), row(71, 479), row(69, 469), row(67, 459), row(65, 449),
    row(63, 438), row(61, 428), row(59, 418), row(57, 408), row(55, 397), row(53, 387),
    row(51, 377), row(49, 367), row(47, 356), row(45, 346), row(43, 336), row(41, 326),
    row(39, 315), row(37, 305), row(36, 300), row(34, 266), row(32, 231), row(30, 197),
    row(28, 163), row(26, 128), row(24, 94), row(22, 59), row(20, 25),
];

const WALK_2KM_45_49: &[ScoreRow] = &[
    row(1090, 500), row(1105, 488), row(1120, 475), row(1135, 463), row(1150, 450), row(1165, 438),
    row(1180, 425), row(1195, 413), row(1210, 400), row(1225, 388), row(1240, 375), row(1255, 363),
    row(1270, 350), row(1285, 338), row(1300, 325), row(1315, 313), row(1330, 300), row(1360, 254),
    row(1390, 208), row(1420, 163), row(1450, 117), row(1480, 71), row(1510, 25),
];

const PUSHUPS_45_49: &[ScoreRow] = &[
    row(47, 150), row(45, 144), row(43, 139), row(41, 133), row(39, 127), row(37, 121),
    row(35, 116), row(33, 110), row(31, 104), row(29, 99), row(27, 93), row(26, 90),
    row(25, 83), row(24, 75), row(23, 68), row(22, 60), row(21, 53), row(20, 45),
    row(19, 38), row(18, 30), row(17, 23), row(16, 15), row(15, 8),
];

const HRPU_45_49: &[ScoreRow] = &[
    row(35, 150), row(33, 142), row(31, 134), row(29, 126), row(27, 118), row(25, 110),
    row(23, 102), row(21, 94), row(20, 90), row(19, 81), row(18, 72), row(17, 63),
    row(16, 54), row(15, 44), row(14, 35), row(13, 26), row(12, 17), row(11, 8),
];

const SITUPS_45_49: &[ScoreRow] = &[
    row(43, 150), row(41, 142), row(39, 134), row(37, 126), row(35, 118), row(33, 110),
    row(31, 102), row(29, 94), row(28, 90), row(27, 81), row(26, 72), row(25, 63),
    row(24, 54), row(23, 44), row(22, 35), row(21, 26), row(20, 17), row(19, 8),
];

const CLRC_45_49: &[ScoreRow] = &[
    row(41, 150), row(39, 142), row(37, 134), row(35, 126), row(33, 118), row(31, 110),
    row(29, 102), row(27, 94), row(26, 90), row(25, 81), row(24, 72), row(23, 63),
    row(22, 54), row(21, 44), row(20, 35), row(19, 26), row(18, 17), row(17, 8),
];

const PLANK_45_49: &[ScoreRow] = &[
    row(170, 150), row(160, 144), row(150, 138), row(140, 132), row(130, 126), row(120, 120),
    row(110, 114), row(100, 108), row(90, 102), row(80, 96), row(70, 90), row(65, 80),
    row(60, 70), row(55, 59), row(50, 49), row(45, 39), row(40, 29), row(35, 18),
    row(30, 8),
];

// 50-54

const RUN_2MILE_50_54: &[ScoreRow] = &[
    row(900, 500), row(915, 488), row(930, 475), row(945, 463), row(960, 450), row(975, 438),
    row(990, 425), row(1005, 413), row(1020, 400), row(1035, 388), row(1050, 375), row(1065, 363),
    row(1080, 350), row(1095, 338), row(1110, 325), row(1125, 313), row(1140, 300), row(1170, 266),
    row(1200, 231), row(1230, 197), row(1260, 163), row(1290, 128), row(1320, 94), row(1350, 59),
    row(1380, 25),
];

const HAMR_50_54: &[ScoreRow] = &[
    row(70, 500), row(68, 489), row(66, 479), row(64, 468), row(62, 458), row(60, 447),
    row(58, 437), row(56, 426), row(54, 416), row(52, 405), row(50, 395), row(48, 384),
    row(46, 374), row(44, 363), row(42, 353), row(40, 342), row(38, 332), row(36, 321),
    row(34, 311), row(32, 300), row(30, 261), row(28, 221), row(26, 182), row(24, 143),
    row(22, 104), row(20, 64), row(18, 25),
];

const WALK_2KM_50_54: &[ScoreRow] = &[
    row(1110, 500), row(1125, 488), row(1140, 475), row(1155, 463), row(1170, 450), row(1185, 438),
    row(1200, 425), row(1215, 413), row(1230, 400), row(1245, 388), row(1260, 375), row(1275, 363),
    row(1290, 350), row(1305, 338), row(1320, 325), row(1335, 313), row(1350, 300), row(1380, 254),
    row(1410, 208), row(1440, 163), row(1470, 117), row(1500, 71), row(1530, 25),
];

const PUSHUPS_50_54: &[ScoreRow] = &[
    row(44, 150), row(42, 144), row(40, 138), row(38, 132), row(36, 126), row(34, 120),
    row(32, 114), row(30, 108), row(28, 102), row(26, 96), row(24, 90), row(23, 82),
    row(22, 74), row(21, 65), row(20, 57), row(19, 49), row(18, 41), row(17, 33),
    row(16, 24), row(15, 16), row(14, 8),
];

const HRPU_50_54: &[ScoreRow] = &[
    row(32, 150), row(30, 141), row(28, 133), row(26, 124), row(24, 116), row(22, 107),
    row(20, 99), row(18, 90), row(17, 80), row(16, 70), row(15, 59), row(14, 49),
    row(13, 39), row(12, 29), row(11, 18), row(10, 8),
];

const SITUPS_50_54: &[ScoreRow] = &[
    row(40, 150), row(38, 141), row(36, 133), row(34, 124), row(32, 116), row(30, 107),
    row(28, 99), row(26, 90), row(25, 80), row(24, 70), row(23, 59), row(22, 49),
    row(21, 39), row(20, 29), row(19, 18), row(18, 8),
];

const CLRC_50_54: &[ScoreRow] = &[
    row(38, 150), row(36, 141), row(34, 133), row(32, 124), row(30, 116), row(28, 107),
    row(26, 99), row(24, 90), row(23, 80), row(22, 70), row(21, 59), row(20, 49),
    row(19, 39), row(18, 29), row(17, 18), row(16, 8),
];

const PLANK_50_54: &[ScoreRow] = &[
    row(160, 150), row(150, 144), row(140, 137), row(130, 131), row(120, 125), row(110, 118),
    row(100, 112), row(90, 106), row(80, 99), row(70, 93), row(65, 90), row(60, 79),
    row(55, 68), row(50, 58), row(45, 47), row(40, 36), row(35, 25), row(30, 14),
    row(27, 8),
];

// 55-59

const RUN_2MILE_55_59: &[ScoreRow] = &[
    row(918, 500), row(933, 488), row(948, 475), row(963, 463), row(978, 450), row(993, 438),
    row(1008, 425), row(1023, 413), row(1038, 400), row(1053, 388), row(1068, 375), row(1083, 363),
    row(1098, 350), row(1113, 338), row(1128, 325), row(1143, 313), row(1158, 300), row(1188, 266),
    row(1218, 231), row(1248, 197), row(1278, 163), row(1308, 128), row(1338, 94), row(1368, 59),
    row(1398, 25),
];

const HAMR_55_59: &[ScoreRow] = &[
    row(65, 500), row(63, 489), row(61, 478), row(59, 468), row(57, 457), row(55, 446),
    row(53, 435), row(51, 424), row(49, 414), row(47, 403), row(45, 392), row(43, 381),
    row(41, 370), row(39, 359), row(37, 349), row(35, 338), row(33, 327), row(31, 316),
    row(29, 305), row(28, 300), row(26, 254), row(24, 208), row(22, 163), row(20, 117),
    row(18, 71), row(16, 25),
];

const WALK_2KM_55_59: &[ScoreRow] = &[
    row(1130, 500), row(1145, 488), row(1160, 475), row(1175, 463), row(1190, 450), row(1205, 438),
    row(1220, 425), row(1235, 413), row(1250, 400), row(1265, 388), row(1280, 375), row(1295, 363),
    row(1310, 350), row(1325, 338), row(1340, 325), row(1355, 313), row(1370, 300), row(1400, 254),
    row(1430, 208), row(1460, 163), row(1490, 117), row(1520, 71), row(1550, 25),
];

const PUSHUPS_55_59: &[ScoreRow] = &[
    row(41, 150), row(39, 144), row(37, 137), row(35, 131), row(33, 125), row(31, 118),
    row(29, 112), row(27, 106), row(25, 99), row(23, 93), row(22, 90), row(21, 81),
    row(20, 72), row(19, 63), row(18, 54), row(17, 44), row(16, 35), row(15, 26),
    row(14, 17), row(13, 8),
];

const HRPU_55_59: &[ScoreRow] = &[
    row(29, 150), row(27, 141), row(25, 132), row(23, 122), row(21, 113), row(19, 104),
    row(17, 95), row(16, 90), row(15, 78), row(14, 67), row(13, 55), row(12, 43),
    row(11, 31), row(10, 20), row(9, 8),
];

const SITUPS_55_59: &[ScoreRow] = &[
    row(37, 150), row(35, 141), row(33, 132), row(31, 122), row(29, 113), row(27, 104),
    row(25, 95), row(24, 90), row(23, 78), row(22, 67), row(21, 55), row(20, 43),
    row(19, 31), row(18, 20), row(17, 8),
];

const CLRC_55_59: &[ScoreRow] = &[
    row(35, 150), row(33, 141), row(31, 132), row(29, 122), row(27, 113), row(25, 104),
    row(23, 95), row(22, 90), row(21, 78), row(20, 67), row(19, 55), row(18, 43),
    row(17, 31), row(16, 20), row(15, 8),
];

const PLANK_55_59: &[ScoreRow] = &[
    row(150, 150), row(140, 143), row(130, 137), row(120, 130), row(110, 123), row(100, 117),
    row(90, 110), row(80, 103), row(70, 97), row(60, 90), row(55, 79), row(50, 67),
    row(45, 56), row(40, 44), row(35, 33), row(30, 22), row(25, 10), row(24, 8),
];

// 60+

const RUN_2MILE_60_PLUS: &[ScoreRow] = &[
    row(936, 500), row(951, 488), row(966, 475), row(981, 463), row(996, 450), row(1011, 438),
    row(1026, 425), row(1041, 413), row(1056, 400), row(1071, 388), row(1086, 375), row(1101, 363),
    row(1116, 350), row(1131, 338), row(1146, 325), row(1161, 313), row(1176, 300), row(1206, 266),
    row(1236, 231), row(1266, 197), row(1296, 163), row(1326, 128), row(1356, 94), row(1386, 59),
    row(1416, 25),
];

const HAMR_60_PLUS: &[ScoreRow] = &[
    row(60, 500), row(58, 489), row(56, 478), row(54, 467), row(52, 456), row(50, 444),
    row(48, 433), row(46, 422), row(44, 411), row(42, 400), row(40, 389), row(38, 378),
    row(36, 367), row(34, 356), row(32, 344), row(30, 333), row(28, 322), row(26, 311),
    row(24, 300), row(22, 245), row(20, 190), row(18, 135), row(16, 80), row(14, 25),
];

const WALK_2KM_60_PLUS: &[ScoreRow] = &[
    row(1150, 500), row(1165, 488), row(1180, 475), row(1195, 463), row(1210, 450), row(1225, 438),
    row(1240, 425), row(1255, 413), row(1270, 400), row(1285, 388), row(1300, 375), row(1315, 363),
    row(1330, 350), row(1345, 338), row(1360, 325), row(1375, 313), row(1390, 300), row(1420, 254),
    row(1450, 208), row(1480, 163), row(1510, 117), row(1540, 71), row(1570, 25),
];

const PUSHUPS_60_PLUS: &[ScoreRow] = &[
    row(38, 150), row(36, 143), row(34, 137), row(32, 130), row(30, 123), row(28, 117),
    row(26, 110), row(24, 103), row(22, 97), row(20, 90), row(19, 80), row(18, 70),
    row(17, 59), row(16, 49), row(15, 39), row(14, 29), row(13, 18), row(12, 8),
];

const HRPU_60_PLUS: &[ScoreRow] = &[
    row(26, 150), row(24, 140), row(22, 130), row(20, 120), row(18, 110), row(16, 100),
    row(14, 90), row(13, 76), row(12, 63), row(11, 49), row(10, 35), row(9, 22),
    row(8, 8),
];

const SITUPS_60_PLUS: &[ScoreRow] = &[
    row(34, 150), row(32, 140), row(30, 130), row(28, 120), row(26, 110), row(24, 100),
    row(22, 90), row(21, 76), row(20, 63), row(19, 49), row(18, 35), row(17, 22),
    row(16, 8),
];

const CLRC_60_PLUS: &[ScoreRow] = &[
    row(32, 150), row(30, 140), row(28, 130), row(26, 120), row(24, 110), row(22, 100),
    row(20, 90), row(19, 76), row(18, 63), row(17, 49), row(16, 35), row(15, 22),
    row(14, 8),
];

const PLANK_60_PLUS: &[ScoreRow] = &[
    row(140, 150), row(130, 143), row(120, 136), row(110, 129), row(100, 122), row(90, 115),
    row(80, 108), row(70, 101), row(60, 94), row(55, 90), row(50, 78), row(45, 66),
    row(40, 54), row(35, 42), row(30, 30), row(25, 18), row(21, 8),
];
