//! Umm al-Qura month-start table.
//!
//! One entry per Hijri month from Muharram 1318 to Dhu al-Hijjah 1500, each
//! the Modified Julian Day (`JD - 2_400_000`) on which the month begins.
//! Consecutive entries differ by 29 or 30 days. The month after the last
//! entry is not tabulated, so the final month is treated as 29 days long.

/// First Hijri year covered by the table.
pub const START_YEAR: i32 = 1318;

/// Last Hijri year covered by the table.
pub const END_YEAR: i32 = 1500;

/// Number of months in the table.
pub const TABLE_LEN: usize = ((END_YEAR - START_YEAR + 1) * 12) as usize;

/// Length assumed for the final tabulated month.
pub const LAST_MONTH_DAYS: i32 = 29;

/// The published month starts.
pub fn base_table() -> &'static [i32; TABLE_LEN] {
    &UMM_AL_QURA
}

/// Returns true if the year is covered by the table.
pub fn contains_year(year: i32) -> bool {
    (START_YEAR..=END_YEAR).contains(&year)
}

/// Table offset of a Hijri month, or `None` outside the table.
///
/// # Arguments
/// * `year` - Hijri year
/// * `month` - Hijri month (1-12)
pub fn offset(year: i32, month: u32) -> Option<usize> {
    if !contains_year(year) || !(1..=12).contains(&month) {
        return None;
    }
    Some((year - START_YEAR) as usize * 12 + (month - 1) as usize)
}

/// The (year, month) at a table offset.
pub fn year_month(offset: usize) -> (i32, u32) {
    (START_YEAR + (offset / 12) as i32, (offset % 12) as u32 + 1)
}

#[rustfmt::skip]
static UMM_AL_QURA: [i32; TABLE_LEN] = [
    15140, 15170, 15199, 15229, 15259, 15288, 15318, 15348, 15377, 15407, 15436, 15466, // 1318
    15495, 15524, 15554, 15583, 15613, 15643, 15672, 15702, 15731, 15761, 15791, 15820, // 1319
    15850, 15879, 15909, 15938, 15967, 15997, 16026, 16056, 16085, 16115, 16145, 16175, // 1320
    16204, 16234, 16263, 16293, 16322, 16351, 16381, 16410, 16439, 16469, 16499, 16529, // 1321
    16559, 16588, 16618, 16647, 16677, 16706, 16735, 16764, 16794, 16823, 16853, 16883, // 1322
    16913, 16942, 16972, 17002, 17031, 17061, 17090, 17119, 17148, 17178, 17207, 17237, // 1323
    17267, 17296, 17326, 17356, 17385, 17415, 17444, 17474, 17503, 17532, 17562, 17591, // 1324
    17621, 17651, 17680, 17710, 17739, 17769, 17799, 17828, 17858, 17887, 17917, 17946, // 1325
    17976, 18005, 18034, 18064, 18093, 18123, 18153, 18182, 18212, 18241, 18271, 18301, // 1326
    18330, 18360, 18389, 18418, 18448, 18477, 18507, 18536, 18566, 18596, 18625, 18655, // 1327
    18685, 18714, 18744, 18773, 18802, 18832, 18861, 18890, 18920, 18950, 18980, 19009, // 1328
    19039, 19069, 19098, 19128, 19157, 19186, 19216, 19245, 19274, 19304, 19334, 19363, // 1329
    19393, 19423, 19453, 19482, 19512, 19541, 19570, 19600, 19629, 19658, 19688, 19718, // 1330
    19747, 19777, 19807, 19836, 19866, 19896, 19925, 19954, 19984, 20013, 20043, 20072, // 1331
    20102, 20131, 20161, 20190, 20220, 20250, 20279, 20309, 20338, 20368, 20398, 20427, // 1332
    20456, 20486, 20515, 20544, 20574, 20604, 20633, 20663, 20693, 20722, 20752, 20782, // 1333
    20811, 20840, 20869, 20899, 20928, 20958, 20987, 21017, 21047, 21077, 21106, 21136, // 1334
    21165, 21195, 21224, 21254, 21283, 21312, 21342, 21371, 21401, 21431, 21460, 21490, // 1335
    21520, 21549, 21579, 21608, 21638, 21667, 21696, 21726, 21755, 21785, 21814, 21844, // 1336
    21874, 21904, 21933, 21963, 21992, 22022, 22051, 22080, 22110, 22139, 22169, 22198, // 1337
    22228, 22257, 22287, 22317, 22346, 22376, 22406, 22435, 22464, 22494, 22523, 22553, // 1338
    22582, 22612, 22641, 22671, 22700, 22730, 22760, 22790, 22819, 22849, 22878, 22907, // 1339
    22937, 22966, 22995, 23025, 23054, 23084, 23114, 23144, 23174, 23203, 23233, 23262, // 1340
    23291, 23321, 23350, 23379, 23409, 23438, 23468, 23498, 23528, 23557, 23587, 23617, // 1341
    23646, 23675, 23704, 23734, 23763, 23793, 23822, 23852, 23882, 23911, 23941, 23971, // 1342
    24000, 24030, 24059, 24088, 24118, 24147, 24177, 24206, 24236, 24265, 24295, 24325, // 1343
    24354, 24384, 24413, 24443, 24472, 24502, 24532, 24561, 24590, 24620, 24649, 24679, // 1344
    24708, 24738, 24767, 24797, 24827, 24857, 24886, 24916, 24945, 24974, 25004, 25033, // 1345
    25062, 25092, 25121, 25151, 25181, 25211, 25241, 25270, 25300, 25329, 25358, 25388, // 1346
    25417, 25446, 25476, 25505, 25535, 25565, 25595, 25624, 25654, 25684, 25713, 25742, // 1347
    25772, 25801, 25830, 25860, 25889, 25919, 25949, 25978, 26008, 26038, 26068, 26097, // 1348
    26126, 26156, 26185, 26214, 26244, 26273, 26303, 26333, 26362, 26392, 26422, 26451, // 1349
    26481, 26510, 26540, 26569, 26599, 26628, 26658, 26687, 26716, 26746, 26776, 26805, // 1350
    26835, 26865, 26894, 26924, 26953, 26983, 27012, 27042, 27071, 27100, 27130, 27159, // 1351
    27189, 27219, 27248, 27278, 27308, 27337, 27367, 27396, 27426, 27455, 27484, 27514, // 1352
    27543, 27573, 27602, 27632, 27662, 27692, 27721, 27751, 27780, 27809, 27839, 27868, // 1353
    27898, 27927, 27957, 27986, 28016, 28046, 28075, 28105, 28135, 28164, 28194, 28223, // 1354
    28252, 28282, 28311, 28340, 28370, 28400, 28429, 28459, 28489, 28518, 28548, 28578, // 1355
    28607, 28636, 28666, 28695, 28725, 28754, 28784, 28813, 28843, 28872, 28902, 28932, // 1356
    28962, 28991, 29020, 29050, 29079, 29109, 29138, 29167, 29197, 29226, 29256, 29286, // 1357
    29316, 29345, 29375, 29404, 29434, 29463, 29493, 29522, 29551, 29581, 29610, 29640, // 1358
    29670, 29699, 29729, 29759, 29788, 29818, 29847, 29877, 29906, 29935, 29964, 29994, // 1359
    30024, 30053, 30083, 30113, 30143, 30172, 30202, 30231, 30261, 30290, 30319, 30349, // 1360
    30378, 30408, 30437, 30467, 30497, 30526, 30556, 30586, 30615, 30644, 30674, 30703, // 1361
    30733, 30762, 30792, 30821, 30851, 30880, 30910, 30940, 30969, 30999, 31028, 31058, // 1362
    31087, 31117, 31146, 31176, 31205, 31235, 31264, 31294, 31323, 31353, 31382, 31412, // 1363
    31442, 31471, 31501, 31530, 31560, 31589, 31618, 31648, 31677, 31707, 31736, 31766, // 1364
    31796, 31826, 31856, 31885, 31914, 31944, 31973, 32002, 32032, 32061, 32091, 32120, // 1365
    32150, 32180, 32210, 32239, 32269, 32298, 32328, 32357, 32386, 32416, 32445, 32475, // 1366
    32504, 32534, 32564, 32593, 32623, 32653, 32682, 32712, 32741, 32770, 32800, 32829, // 1367
    32859, 32888, 32918, 32947, 32977, 33007, 33037, 33066, 33095, 33125, 33154, 33184, // 1368
    33213, 33243, 33272, 33302, 33331, 33361, 33391, 33420, 33450, 33479, 33509, 33539, // 1369
    33568, 33598, 33627, 33656, 33686, 33715, 33745, 33774, 33804, 33833, 33863, 33893, // 1370
    33923, 33952, 33982, 34011, 34040, 34070, 34099, 34129, 34158, 34188, 34217, 34247, // 1371
    34277, 34307, 34336, 34365, 34395, 34424, 34454, 34483, 34512, 34542, 34571, 34601, // 1372
    34631, 34661, 34690, 34720, 34749, 34779, 34808, 34838, 34867, 34896, 34926, 34955, // 1373
    34985, 35015, 35044, 35074, 35104, 35133, 35163, 35192, 35222, 35251, 35280, 35310, // 1374
    35339, 35369, 35398, 35428, 35458, 35487, 35517, 35547, 35576, 35606, 35635, 35665, // 1375
    35694, 35723, 35753, 35782, 35812, 35841, 35871, 35901, 35931, 35960, 35990, 36019, // 1376
    36049, 36078, 36107, 36137, 36166, 36195, 36225, 36255, 36285, 36314, 36344, 36374, // 1377
    36403, 36433, 36462, 36491, 36520, 36550, 36579, 36609, 36639, 36668, 36698, 36728, // 1378
    36758, 36787, 36817, 36846, 36875, 36904, 36934, 36963, 36993, 37023, 37052, 37082, // 1379
    37112, 37141, 37171, 37200, 37230, 37259, 37289, 37318, 37348, 37377, 37407, 37436, // 1380
    37466, 37495, 37525, 37554, 37584, 37614, 37643, 37673, 37702, 37732, 37761, 37790, // 1381
    37820, 37849, 37879, 37908, 37938, 37968, 37997, 38027, 38057, 38086, 38116, 38145, // 1382
    38174, 38204, 38233, 38262, 38292, 38322, 38352, 38381, 38411, 38441, 38470, 38500, // 1383
    38529, 38558, 38588, 38617, 38646, 38676, 38706, 38735, 38765, 38795, 38825, 38854, // 1384
    38884, 38913, 38942, 38972, 39001, 39030, 39060, 39090, 39119, 39149, 39179, 39209, // 1385
    39238, 39268, 39297, 39326, 39356, 39385, 39414, 39444, 39474, 39503, 39533, 39563, // 1386
    39592, 39622, 39651, 39681, 39710, 39740, 39769, 39799, 39828, 39858, 39887, 39917, // 1387
    39946, 39976, 40006, 40035, 40065, 40094, 40124, 40153, 40183, 40212, 40242, 40271, // 1388
    40300, 40330, 40360, 40389, 40419, 40449, 40478, 40508, 40538, 40567, 40596, 40626, // 1389
    40655, 40684, 40714, 40743, 40773, 40803, 40833, 40862, 40892, 40921, 40951, 40980, // 1390
    41010, 41039, 41068, 41098, 41127, 41157, 41187, 41216, 41246, 41276, 41305, 41335, // 1391
    41364, 41394, 41423, 41452, 41482, 41511, 41541, 41570, 41600, 41630, 41659, 41689, // 1392
    41719, 41748, 41778, 41807, 41836, 41866, 41895, 41925, 41954, 41984, 42013, 42043, // 1393
    42073, 42103, 42132, 42162, 42191, 42220, 42250, 42279, 42309, 42338, 42368, 42397, // 1394
    42427, 42457, 42486, 42516, 42546, 42575, 42605, 42634, 42663, 42693, 42722, 42751, // 1395
    42781, 42811, 42840, 42870, 42900, 42929, 42959, 42989, 43018, 43047, 43077, 43106, // 1396
    43135, 43165, 43194, 43224, 43254, 43283, 43313, 43343, 43373, 43402, 43431, 43460, // 1397
    43490, 43519, 43549, 43578, 43608, 43638, 43667, 43697, 43727, 43756, 43786, 43815, // 1398
    43844, 43874, 43903, 43933, 43962, 43992, 44021, 44051, 44081, 44110, 44140, 44169, // 1399
    44199, 44229, 44258, 44288, 44317, 44346, 44376, 44405, 44435, 44464, 44494, 44523, // 1400
    44553, 44583, 44613, 44642, 44672, 44701, 44730, 44760, 44789, 44818, 44848, 44877, // 1401
    44907, 44937, 44967, 44997, 45026, 45056, 45085, 45114, 45144, 45173, 45202, 45232, // 1402
    45261, 45291, 45321, 45351, 45380, 45410, 45440, 45469, 45498, 45528, 45557, 45586, // 1403
    45616, 45645, 45675, 45705, 45734, 45764, 45794, 45823, 45853, 45882, 45912, 45941, // 1404
    45970, 46000, 46029, 46059, 46088, 46118, 46148, 46178, 46207, 46237, 46266, 46295, // 1405
    46325, 46355, 46384, 46413, 46443, 46472, 46502, 46532, 46561, 46591, 46620, 46650, // 1406
    46680, 46709, 46739, 46768, 46797, 46827, 46856, 46886, 46915, 46945, 46974, 47004, // 1407
    47034, 47064, 47093, 47123, 47152, 47182, 47211, 47240, 47270, 47299, 47328, 47358, // 1408
    47388, 47418, 47448, 47477, 47507, 47536, 47566, 47595, 47624, 47654, 47683, 47712, // 1409
    47742, 47772, 47802, 47831, 47861, 47891, 47920, 47950, 47979, 48008, 48038, 48067, // 1410
    48096, 48126, 48156, 48185, 48215, 48245, 48274, 48304, 48334, 48363, 48392, 48422, // 1411
    48451, 48481, 48510, 48540, 48569, 48599, 48628, 48658, 48688, 48718, 48747, 48776, // 1412
    48806, 48835, 48865, 48894, 48923, 48953, 48982, 49012, 49042, 49072, 49101, 49131, // 1413
    49160, 49190, 49219, 49249, 49278, 49307, 49337, 49366, 49396, 49426, 49455, 49485, // 1414
    49515, 49544, 49574, 49603, 49633, 49662, 49691, 49721, 49750, 49780, 49809, 49839, // 1415
    49869, 49899, 49928, 49958, 49987, 50017, 50046, 50075, 50105, 50134, 50164, 50193, // 1416
    50223, 50253, 50282, 50312, 50342, 50371, 50400, 50430, 50459, 50489, 50518, 50548, // 1417
    50577, 50607, 50636, 50666, 50696, 50725, 50755, 50784, 50814, 50843, 50873, 50902, // 1418
    50932, 50961, 50991, 51020, 51050, 51079, 51109, 51138, 51168, 51198, 51228, 51257, // 1419
    51286, 51315, 51345, 51374, 51403, 51433, 51462, 51492, 51522, 51552, 51582, 51611, // 1420
    51641, 51670, 51699, 51729, 51758, 51787, 51816, 51846, 51876, 51906, 51936, 51965, // 1421
    51995, 52025, 52054, 52083, 52113, 52142, 52171, 52200, 52230, 52260, 52290, 52319, // 1422
    52349, 52379, 52408, 52438, 52467, 52497, 52526, 52555, 52585, 52614, 52644, 52673, // 1423
    52703, 52733, 52762, 52792, 52822, 52851, 52881, 52910, 52939, 52969, 52998, 53028, // 1424
    53057, 53087, 53116, 53146, 53176, 53205, 53235, 53264, 53294, 53324, 53353, 53383, // 1425
    53412, 53441, 53471, 53500, 53530, 53559, 53589, 53619, 53648, 53678, 53708, 53737, // 1426
    53767, 53796, 53825, 53855, 53884, 53914, 53943, 53973, 54003, 54032, 54062, 54092, // 1427
    54121, 54151, 54180, 54209, 54239, 54268, 54297, 54327, 54357, 54387, 54416, 54446, // 1428
    54476, 54505, 54535, 54564, 54593, 54623, 54652, 54681, 54711, 54741, 54770, 54800, // 1429
    54830, 54859, 54889, 54919, 54948, 54977, 55007, 55036, 55066, 55095, 55125, 55154, // 1430
    55184, 55213, 55243, 55273, 55302, 55332, 55361, 55391, 55420, 55450, 55479, 55508, // 1431
    55538, 55567, 55597, 55627, 55657, 55686, 55716, 55745, 55775, 55804, 55834, 55863, // 1432
    55892, 55922, 55951, 55981, 56011, 56040, 56070, 56100, 56129, 56159, 56188, 56218, // 1433
    56247, 56276, 56306, 56335, 56365, 56394, 56424, 56454, 56483, 56513, 56543, 56572, // 1434
    56601, 56631, 56660, 56690, 56719, 56749, 56778, 56808, 56837, 56867, 56897, 56926, // 1435
    56956, 56985, 57015, 57044, 57074, 57103, 57133, 57162, 57192, 57221, 57251, 57280, // 1436
    57310, 57340, 57369, 57399, 57429, 57458, 57487, 57517, 57546, 57576, 57605, 57634, // 1437
    57664, 57694, 57723, 57753, 57783, 57813, 57842, 57871, 57901, 57930, 57959, 57989, // 1438
    58018, 58048, 58077, 58107, 58137, 58167, 58196, 58226, 58255, 58285, 58314, 58343, // 1439
    58373, 58402, 58432, 58461, 58491, 58521, 58551, 58580, 58610, 58639, 58669, 58698, // 1440
    58727, 58757, 58786, 58816, 58845, 58875, 58905, 58934, 58964, 58994, 59023, 59053, // 1441
    59082, 59111, 59141, 59170, 59200, 59229, 59259, 59288, 59318, 59348, 59377, 59407, // 1442
    59436, 59466, 59495, 59525, 59554, 59584, 59613, 59643, 59672, 59702, 59731, 59761, // 1443
    59791, 59820, 59850, 59879, 59909, 59939, 59968, 59997, 60027, 60056, 60086, 60115, // 1444
    60145, 60174, 60204, 60234, 60264, 60293, 60323, 60352, 60381, 60411, 60440, 60469, // 1445
    60499, 60528, 60558, 60588, 60618, 60647, 60677, 60707, 60736, 60765, 60795, 60824, // 1446
    60853, 60883, 60912, 60942, 60972, 61002, 61031, 61061, 61090, 61120, 61149, 61179, // 1447
    61208, 61237, 61267, 61296, 61326, 61356, 61385, 61415, 61445, 61474, 61504, 61533, // 1448
    61563, 61592, 61621, 61651, 61680, 61710, 61739, 61769, 61799, 61828, 61858, 61888, // 1449
    61917, 61947, 61976, 62006, 62035, 62064, 62094, 62123, 62153, 62182, 62212, 62242, // 1450
    62271, 62301, 62331, 62361, 62390, 62419, 62449, 62478, 62507, 62537, 62567, 62596, // 1451
    62626, 62656, 62685, 62715, 62745, 62774, 62803, 62833, 62862, 62891, 62921, 62950, // 1452
    62980, 63010, 63039, 63069, 63099, 63128, 63158, 63187, 63217, 63246, 63275, 63305, // 1453
    63334, 63364, 63393, 63423, 63453, 63482, 63512, 63542, 63571, 63601, 63630, 63660, // 1454
    63689, 63718, 63748, 63777, 63807, 63837, 63866, 63896, 63925, 63955, 63985, 64014, // 1455
    64044, 64073, 64102, 64132, 64161, 64191, 64220, 64250, 64279, 64309, 64339, 64369, // 1456
    64398, 64428, 64457, 64486, 64516, 64545, 64574, 64604, 64633, 64663, 64693, 64723, // 1457
    64753, 64782, 64812, 64841, 64870, 64900, 64929, 64958, 64988, 65017, 65047, 65077, // 1458
    65107, 65136, 65166, 65196, 65225, 65254, 65284, 65313, 65342, 65372, 65401, 65431, // 1459
    65461, 65490, 65520, 65550, 65579, 65609, 65638, 65668, 65697, 65726, 65756, 65785, // 1460
    65815, 65844, 65874, 65904, 65933, 65963, 65992, 66022, 66051, 66081, 66111, 66140, // 1461
    66169, 66199, 66228, 66258, 66287, 66317, 66347, 66376, 66406, 66435, 66465, 66495, // 1462
    66524, 66553, 66583, 66612, 66642, 66671, 66701, 66730, 66760, 66790, 66820, 66849, // 1463
    66879, 66908, 66938, 66967, 66996, 67026, 67055, 67084, 67114, 67144, 67174, 67203, // 1464
    67233, 67263, 67292, 67322, 67351, 67380, 67410, 67439, 67468, 67498, 67528, 67557, // 1465
    67587, 67617, 67647, 67676, 67706, 67735, 67764, 67793, 67823, 67852, 67882, 67912, // 1466
    67941, 67971, 68001, 68030, 68060, 68090, 68119, 68148, 68178, 68207, 68237, 68266, // 1467
    68296, 68325, 68355, 68384, 68414, 68444, 68473, 68503, 68532, 68562, 68591, 68621, // 1468
    68650, 68679, 68709, 68738, 68768, 68798, 68827, 68857, 68887, 68916, 68946, 68975, // 1469
    69005, 69034, 69063, 69093, 69122, 69152, 69182, 69211, 69241, 69271, 69300, 69330, // 1470
    69359, 69389, 69418, 69447, 69477, 69506, 69536, 69565, 69595, 69625, 69654, 69684, // 1471
    69714, 69743, 69773, 69802, 69831, 69861, 69890, 69920, 69949, 69979, 70009, 70038, // 1472
    70068, 70097, 70127, 70156, 70186, 70216, 70245, 70274, 70304, 70333, 70363, 70392, // 1473
    70422, 70451, 70481, 70511, 70540, 70570, 70600, 70629, 70658, 70688, 70717, 70747, // 1474
    70776, 70805, 70835, 70865, 70894, 70924, 70954, 70984, 71013, 71042, 71072, 71101, // 1475
    71130, 71160, 71189, 71219, 71248, 71278, 71308, 71338, 71367, 71397, 71426, 71456, // 1476
    71485, 71514, 71544, 71573, 71602, 71632, 71662, 71692, 71722, 71751, 71781, 71810, // 1477
    71840, 71869, 71898, 71928, 71957, 71987, 72016, 72046, 72076, 72105, 72135, 72165, // 1478
    72194, 72224, 72253, 72282, 72312, 72341, 72371, 72400, 72430, 72459, 72489, 72519, // 1479
    72548, 72578, 72607, 72637, 72666, 72696, 72725, 72755, 72784, 72814, 72843, 72873, // 1480
    72902, 72932, 72961, 72991, 73021, 73050, 73080, 73109, 73139, 73168, 73198, 73227, // 1481
    73256, 73286, 73315, 73345, 73375, 73405, 73435, 73464, 73494, 73523, 73552, 73582, // 1482
    73611, 73640, 73670, 73699, 73729, 73759, 73789, 73818, 73848, 73878, 73907, 73936, // 1483
    73966, 73995, 74024, 74054, 74083, 74113, 74143, 74173, 74202, 74232, 74261, 74291, // 1484
    74320, 74350, 74379, 74408, 74438, 74467, 74497, 74527, 74556, 74586, 74616, 74645, // 1485
    74675, 74704, 74734, 74763, 74792, 74822, 74851, 74881, 74910, 74940, 74970, 74999, // 1486
    75029, 75059, 75088, 75118, 75147, 75177, 75206, 75235, 75265, 75294, 75324, 75353, // 1487
    75383, 75413, 75442, 75472, 75502, 75531, 75561, 75590, 75619, 75649, 75678, 75708, // 1488
    75737, 75767, 75796, 75826, 75856, 75886, 75915, 75945, 75974, 76003, 76033, 76062, // 1489
    76092, 76121, 76151, 76180, 76210, 76240, 76269, 76299, 76329, 76358, 76387, 76417, // 1490
    76446, 76476, 76505, 76534, 76564, 76594, 76623, 76653, 76683, 76712, 76742, 76771, // 1491
    76801, 76830, 76860, 76889, 76918, 76948, 76978, 77007, 77037, 77066, 77096, 77126, // 1492
    77155, 77185, 77214, 77244, 77273, 77303, 77332, 77361, 77391, 77420, 77450, 77480, // 1493
    77510, 77539, 77569, 77598, 77628, 77657, 77687, 77716, 77745, 77774, 77804, 77834, // 1494
    77864, 77893, 77923, 77953, 77982, 78012, 78041, 78070, 78100, 78129, 78158, 78188, // 1495
    78218, 78247, 78277, 78307, 78337, 78366, 78396, 78425, 78454, 78484, 78513, 78542, // 1496
    78572, 78602, 78631, 78661, 78691, 78720, 78750, 78779, 78809, 78838, 78868, 78897, // 1497
    78927, 78956, 78986, 79015, 79045, 79074, 79104, 79134, 79163, 79193, 79222, 79252, // 1498
    79281, 79311, 79340, 79370, 79399, 79428, 79458, 79488, 79517, 79547, 79576, 79606, // 1499
    79636, 79665, 79695, 79724, 79754, 79783, 79812, 79842, 79871, 79901, 79930, 79960, // 1500
];
