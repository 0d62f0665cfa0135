//! Precomputed 64x64 blue-noise threshold matrix.
//!
//! Generated offline with void-and-cluster (toroidal Gaussian, sigma 1.9) and
//! quantized to 256 levels of 16 cells each, stored row-major as signed bytes.

#[rustfmt::skip]
pub(crate) const BLUE_NOISE_64: [i8; 4096] = [
    -69, 10, -56, 68, -119, 124, 85, -87, 20, -76, -123, 29, -88, -104, -58, -125, -47, 14, -112, -23, 30, 116, -9, 84, -31, 93, -61, -23, 44, -94, 109, -120,
    34, -6, -74, -40, 2, 91, -95, -8, -111, 117, 84, 37, -120, 77, -21, 86, -35, -82, -5, -100, 83, 66, 26, -50, -20, 82, 21, -89, 41, -5, 20, -37,
    101, -85, 49, 95, 1, -45, -24, -101, 110, 68, -6, 78, -29, 90, 49, -18, 96, -86, 42, 57, -93, -42, 72, 39, -89, 107, -125, 76, -80, -8, 12, -32,
    58, -59, 122, 80, -106, 52, -32, 79, -45, 25, 3, 63, -78, 17, 33, 116, -123, 54, 125, 44, -65, -37, -110, 95, -86, -63, 117, -125, -17, 63, -97, -121,
    57, -7, -102, -34, 39, -80, 53, 9, 92, -37, -67, 126, 14, -78, 4, 75, 122, -68, -5, 107, -60, 1, 16, -103, -16, 49, 2, -39, 32, 100, -67, 75,
    95, -100, 27, -24, 18, -83, 32, 113, -123, -18, -88, -32, 99, -47, -66, -101, 7, -18, -50, 19, 102, -12, -74, 62, -2, 46, 71, -47, 99, -60, 77, 34,
    -52, 121, 78, -66, 21, 116, -128, -57, 31, -111, -18, 59, -119, 39, -40, -108, 24, 65, -116, -34, 90, -124, 120, -66, -49, 23, 125, -97, 67, -109, -45, 48,
    -87, 7, -48, 68, -121, 106, -54, -73, 55, 93, -62, 123, -110, 50, -3, 101, 61, -72, 91, -88, -128, 36, 119, 16, -119, -31, 29, -110, 11, -80, 110, -28,
    27, -19, -112, 99, -95, -14, 73, 105, -2, 49, -94, -49, 105, -62, 115, -92, -25, -52, 12, 74, 28, -82, 54, 99, 64, -77, 84, -58, -21, 114, 23, -128,
    -11, 117, -77, 98, -15, 44, 8, -5, 71, -99, 13, 42, -14, 72, -90, -30, 38, -112, 70, -28, 1, 77, -95, -52, 108, -72, -12, 123, 52, -39, 3, -117,
    68, -75, 45, 9, -54, 60, -29, -71, -84, 84, 98, 25, -3, 69, -14, 87, 53, -77, 104, -98, -17, 43, -39, -25, -107, -6, -120, 15, 58, -2, -75, 87,
    -27, 34, -114, 53, -64, -93, 125, -109, -26, 30, -41, 85, -127, -56, 117, 82, -45, 22, 120, -58, 48, -41, 89, -19, 55, 75, -91, 86, -101, 38, 93, -91,
    14, -42, 87, -4, 109, 26, -116, 40, -43, 12, -105, -27, -82, -113, 32, 7, -127, 38, -9, 127, -69, 84, -114, 9, 113, 37, 97, -31, -91, 43, 102, -56,
    60, 77, -42, -2, 88, -34, 78, -48, 99, -84, 108, -1, -74, 27, 12, -116, -79, -12, -106, 105, 11, -115, -79, 25, -107, 6, -58, 20, -24, -66, -11, 115,
    -60, 54, -124, -85, -37, -102, 79, 123, -12, 66, 118, -69, 50, 94, -46, -66, 100, 71, -43, -111, 5, -53, 68, 25, -84, 75, -46, -68, 118, -112, -38, -101,
    17, -90, 108, -104, 12, 35, -126, 62, 18, -65, 53, -104, 67, -25, 48, 107, 3, 64, 31, -70, -16, 59, 127, -32, 102, 41, -41, 112, -126, 59, 79, -109,
    103, -23, 127, 32, -66, 94, 15, -89, -61, -125, 35, -38, 80, 16, 113, -100, -31, -85, 22, 58, 95, -91, 107, -11, -60, -100, 51, -14, 28, 69, 8, -9,
    127, -68, -20, 27, -55, 119, -74, -10, 41, -116, -16, 121, -50, 92, -97, -63, -37, 88, -90, 97, -101, 71, -64, -1, -118, -84, 94, 64, -2, -48, -82, 24,
    0, -99, 72, -11, 62, -26, 47, 1, 100, -21, 59, 4, -119, -89, -20, 59, -3, 118, -62, -22, 35, -35, -125, 45, -28, 124, 4, 82, -124, 92, -82, 36,
    50, -123, 66, 98, -86, 52, -25, -97, 110, 79, 10, -34, 34, -83, -7, 77, -123, 43, -54, -30, 18, 37, -49, 84, 51, -10, -69, -103, 32, 121, 47, -34,
    -71, 41, -50, -111, 114, -79, -46, -107, 72, -52, -94, 106, -10, -57, 27, 76, 39, -122, 81, -104, 111, 16, -71, 89, 60, -115, 19, -74, -51, -27, 111, -61,
    -43, 84, -33, -4, -118, 73, 6, 92, -41, -57, -89, 101, -122, 57, 119, 23, -20, 111, 55, -3, 118, -126, -91, 109, 28, -26, 80, 15, -92, -20, -118, 96,
    13, -88, 91, 23, 6, -121, 84, 34, 116, 24, -75, 90, 45, 123, -73, -112, -51, 9, 51, -78, -6, -50, 74, 0, -83, -43, 105, -93, 55, -2, -102, 62,
    -110, 19, -77, 42, -48, 114, -64, 24, -113, -5, 71, 20, -68, 2, -48, -107, -74, 9, -113, -82, 75, -13, -36, 12, -106, -55, 117, -37, 100, 67, -54, 81,
    57, 116, -31, -63, 52, 106, -14, -68, -30, -115, 11, -43, -106, 67, -34, 88, 104, -15, -39, 92, -94, 41, 119, -107, 30, 93, -22, 42, 120, 25, 81, -16,
    104, 3, 117, 90, -14, -102, 37, -84, 58, 126, 45, -103, 89, -22, 42, 94, 71, 29, -41, 101, -65, 45, 92, -74, 56, 71, -122, 44, -77, 8, -9, -105,
    -43, -127, -4, 76, -97, -41, 66, -86, -2, 56, 79, 38, -23, 3, -87, 18, -97, -68, 125, 25, 64, -121, -32, -15, -67, 8, 65, -59, -110, -40, -70, -88,
    32, -54, -115, -92, 16, 65, -38, 105, -19, -75, -30, -54, 65, 115, -92, -34, -60, 123, -96, -24, 63, 4, -110, 124, -15, -86, -3, 26, -111, -62, 125, 35,
    -18, 102, 28, -77, -22, 41, 15, 96, 121, -99, -62, 111, -126, 99, 55, -9, 34, 72, -110, -26, 4, -60, 54, 99, 78, -97, -127, -8, 72, 13, 97, 47,
    -29, 74, 54, -71, -24, 81, 0, -128, 85, 9, 33, -119, -8, -80, 16, -126, 60, -9, 39, 84, -121, -46, 33, -60, 20, 98, -45, 112, 51, -30, 75, -85,
    -70, 49, -107, 88, 123, -112, -59, -124, 45, -47, -12, -81, 30, -50, -65, 117, -119, 47, -53, -82, 82, 111, -88, 17, -49, 126, 36, -32, -84, 113, -121, 0,
    -99, 124, -42, 26, 108, -59, -106, 50, -48, -93, 73, 102, -42, 28, 79, 108, 5, -110, -76, 13, 115, -88, 77, -29, -100, 83, -69, -21, 89, -96, 105, 20,
    2, -55, 68, 11, -49, -6, 29, 75, -25, 7, 88, 65, 15, -101, 82, -37, -21, 109, 14, 95, -9, 32, -117, -36, 46, -76, 103, 23, 82, -52, -18, 64,
    -62, 93, -124, -9, 44, -80, 122, 18, 96, -65, 118, 1, -100, 53, -70, -17, -49, 89, 54, -55, 26, -4, 101, 60, 41, 5, -126, 62, 13, -51, -120, 65,
    94, -93, 114, -33, -82, 61, 111, -73, -91, 106, -110, -35, 127, -4, 69, -78, 6, -92, 58, -40, -101, -69, 73, 2, -104, -24, -3, -64, 52, -106, 40, 18,
    -82, -23, 10, 87, -96, 74, -28, 31, -13, -114, 41, -25, -57, 94, -113, 45, -28, -94, 106, -35, -105, -20, -78, -115, -39, 117, -90, 35, -78, -6, 42, -26,
    -114, 31, -13, -122, 43, -98, 92, -38, 22, 58, 38, -67, -87, 46, -117, 23, 89, -62, -128, 40, 123, -17, 52, 114, 89, 63, -115, 95, -95, 117, -36, 106,
    70, 36, -108, 60, -52, -1, -120, -73, -40, 67, -88, 23, 61, 113, 10, -84, 126, 34, 69, -67, 94, 48, 122, 15, -63, -10, 76, -35, 107, -109, 121, -41,
    54, -62, 104, 19, 82, -20, 5, -108, -9, -55, -119, -16, 98, -27, 108, 35, -49, 102, -3, 77, 22, -50, -79, 14, -56, -87, 19, -43, -15, 7, -73, -119,
    -47, 99, -67, 120, -36, 38, 91, 54, 108, -3, 86, -77, -125, -12, -40, 82, 21, -118, -13, 7, -128, 31, -51, 71, -102, 50, 93, -57, 27, 69, -72, 83,
    -86, 6, 73, -77, -44, 125, -64, 49, 70, 120, 86, 11, 61, -57, -107, -13, -98, 64, -33, -86, -110, -27, 104, -124, -11, 42, 122, 73, 33, 56, 88, -4,
    27, -91, -13, 7, -84, 113, -103, 13, -57, -108, 124, -34, 75, 35, -66, -107, -3, -51, -79, 80, 58, -27, -89, 1, 105, 20, -117, -24, -96, -1, 18, -17,
    119, 39, -52, -105, 57, 30, -128, 97, -81, -45, -96, 29, -76, 77, -41, 122, 50, 10, -71, 111, 88, 66, 37, -98, 80, -32, -71, -122, -55, -84, -111, 125,
    -31, 82, 53, -127, 25, -23, 66, -90, -17, 48, 19, -50, 5, -96, 103, 48, 66, 96, 116, -40, -99, 110, 90, -72, -18, -47, -81, 127, 58, 97, -49, -101,
    87, -121, -7, -25, 108, -88, -31, 14, 37, -22, 3, 115, -125, -6, 20, -83, 84, -22, -122, 28, -9, -65, 5, -44, 95, 59, 3, 101, -23, 78, 14, -65,
    43, -102, -54, 104, 76, -64, -44, 102, 80, -69, -119, 94, 58, -24, 121, -58, -30, -93, 39, 15, -61, -8, 25, -122, 61, 85, 42, 7, -66, -127, 46, -32,
    -75, 61, 95, 16, 76, 0, -57, 112, -115, 81, -65, -34, 54, 95, 37, -64, -114, 116, 43, -53, 56, -92, 126, 18, -77, -110, 25, -96, 46, 110, -46, 64,
    -19, 112, 16, -76, -6, 39, -117, 4, 32, -31, 110, 40, -82, -115, 24, -76, 8, -124, -18, 53, -114, 75, 44, -33, 117, -110, 29, -40, 79, -14, 110, 30,
    9, -94, -41, -68, -111, 51, 88, -15, 65, -102, 43, 105, -88, -109, -27, 65, -1, -42, 14, -102, 101, -36, -119, 50, -19, -58, 120, -40, -10, -108, 31, -93,
    0, -116, 68, -34, 96, -98, 127, 62, -79, -9, -96, -56, -1, 84, -15, 61, 79, 30, 102, -71, 125, -44, -81, 4, -57, -92, -7, 113, -103, -84, 69, -59,
    -22, 104, 24, 120, 39, -97, -73, -40, -85, 18, -8, -56, 73, 12, -49, 103, -95, 75, 93, -80, 69, -23, 32, 76, 98, -2, 66, 84, -67, 9, 96, -75,
    86, -44, 33, -87, 51, -17, -57, 19, -112, 89, 68, 14, 119, -42, -109, 98, -50, -86, -35, 0, 86, -95, 63, 100, 16, 73, -69, -28, 53, 21, -3, -115,
    44, 67, -54, -118, -33, -10, 116, 27, 93, 59, 117, -120, -19, 30, 126, 49, -71, 25, -16, -61, 2, 115, -105, -51, -87, -123, 35, -83, 55, -27, -125, 122,
    48, -61, 116, 7, -123, 86, -37, 45, 115, -46, -21, -127, 49, -69, 37, -5, -100, 114, 69, -109, 23, -12, 35, -104, -22, 47, 89, -121, 103, -48, 92, 123,
    -105, -81, 3, 85, 56, 13, 72, -124, -51, 5, -72, -38, 87, -80, -104, -10, -124, -32, 108, -117, 47, 20, -70, -10, 109, -31, 16, -111, 108, -51, 73, 21,
    -7, -23, -103, 79, 24, -71, 103, -92, 2, -65, 30, 96, 72, -89, 108, -27, 55, 11, 43, -55, -26, -66, 108, -124, -51, 124, -80, 5, 37, -64, -91, -35,
    -9, 31, 101, -20, -89, -65, 98, -105, -25, 38, -95, 102, -2, 56, -59, 9, 83, 59, 36, -91, 90, -43, 62, 86, 8, 48, -63, 92, -14, 40, -90, -37,
    -113, 62, -81, 107, -50, -10, 69, -107, -30, 58, -82, -104, -35, 6, 22, -121, -61, -77, 91, -117, 119, 52, 80, -38, -2, 66, 26, -100, -17, 60, 15, 79,
    51, -61, -127, 126, -49, 34, -1, -78, 50, 124, 70, 23, -111, 37, 97, -42, 119, -82, -53, -6, 124, -109, -79, 33, -97, 118, -43, 70, -101, -1, 113, -66,
    99, 36, 1, -31, 56, -114, 12, 35, 81, 106, 18, 124, -15, -53, 89, 76, 121, -37, -8, 28, -89, 5, -76, 18, 96, -90, -58, -33, 119, 86, -117, -72,
    -28, 70, 17, -100, 63, -36, 111, 83, -13, -44, -118, -64, -29, 65, -92, -21, 19, -102, 67, -26, 10, 77, -33, -16, -114, 59, -74, -25, 27, -79, 57, 10,
    77, -97, 124, -63, 41, -86, 117, -18, -58, -117, -7, 42, -77, 57, -99, 34, -21, -106, 64, 100, -45, 72, -102, 45, -115, -13, 41, 70, -109, -43, -3, 114,
    -94, -45, 83, -11, 45, -111, 22, -93, -59, 14, 106, -7, 81, -76, 113, -120, 46, -67, 103, 30, -126, -60, 44, 102, -53, 2, 98, -126, 127, 85, -54, -119,
    -17, -45, 20, -128, 95, 75, -42, -74, 93, -95, -47, 78, -123, 99, -66, -1, -84, 47, 14, -126, -16, 105, -29, 118, -67, 83, 102, 12, -75, 46, 23, 98,
    36, 8, -80, 107, -70, -23, 76, -122, 58, 91, -86, 46, 7, -52, 29, -12, 74, 4, -44, 85, -92, 114, 17, 68, -86, 24, -11, 47, 14, -108, -32, 30,
    91, -75, 66, -7, -25, -99, 6, 23, 49, 65, 3, -27, 115, 13, -39, 69, 104, -50, 85, -70, 36, -57, 61, -5, 28, -48, -127, -27, 112, -88, -55, -122,
    -18, 118, -114, 26, 94, -54, 6, 121, -28, 29, -101, -38, 122, -106, 86, -36, 108, -113, -79, -16, 55, -4, -70, -120, 121, 80, -95, -61, -41, 72, -8, 53,
    120, -89, 44, 105, -55, 32, 122, -122, -35, 109, -70, 33, -107, 49, -11, -116, 25, -98, 125, 2, -83, -112, 11, -96, -36, -84, 56, 1, 76, -11, 91, 53,
    -68, 60, -33, -3, -90, 65, 37, -77, -5, -67, 73, -17, -128, 18, 53, -95, -60, 62, 36, 98, -104, -37, 91, -22, -46, 35, -29, 61, 96, -84, 111, -101,
    -61, 2, -39, -106, 85, -79, 61, -4, -105, 87, -85, 19, -56, -91, 91, 112, -62, -28, 55, -38, 78, 47, 114, 87, 68, 127, 37, -99, -65, 29, -38, -106,
    79, 99, -57, 48, -126, 115, -45, -104, 100, 51, 112, -56, 64, 96, -70, -5, 13, 126, -32, 22, -55, 40, 63, 10, -107, -73, 106, -113, 6, -68, 40, 15,
    -20, -121, 77, 11, 52, -15, -64, 101, -52, 38, -14, 127, 80, 60, -22, -81, 39, -7, -120, 21, 98, -14, -51, -122, -73, 18, -17, 108, -117, 64, 121, 5,
    -87, 19, -99, 73, -19, 12, 87, -34, -116, 17, -90, -2, 34, -81, -25, 41, 89, -124, -90, -1, 117, -117, -83, 110, 50, -2, 87, -17, 28, -123, -44, 102,
    63, 27, 109, -30, -116, 114, -94, 16, -28, 70, -115, -39, 0, -125, -45, 10, 83, 70, 109, -88, -105, -66, 29, -28, -2, -109, -58, 88, -46, 16, -78, -25,
    41, -47, 124, 31, -66, -81, 58, -11, 42, 83, -46, -108, 104, -40, 115, -104, -49, -19, -74, 67, 81, -63, -12, 23, 75, -53, -98, 43, 118, 79, -27, -93,
    86, -52, -69, -85, 39, -45, 28, 80, -74, 53, -96, 104, 45, -68, 29, 120, -113, -72, -50, -21, 64, 9, 90, 106, 41, 76, 52, -31, -94, 46, 105, -124,
    87, 0, -108, -35, 92, 111, -97, 27, -61, 127, -21, 8, 74, -120, 21, 57, 77, 106, 48, 15, -43, 102, -95, -35, -128, 125, -80, -39, -63, -4, 57, -76,
    -113, 46, -6, 126, 72, 1, 96, -127, -9, 118, 8, -80, -20, 97, 65, -95, -33, 26, 4, 43, 121, -79, 54, -96, -44, -86, 100, 9, -7, 74, -59, -15,
    -72, 108, 64, -10, -119, 5, -50, 76, -124, -79, 60, -69, 46, -10, -60, -86, 2, 30, -100, -27, -113, 44, 31, 90, -23, 7, 55, 71, 22, -109, 111, 9,
    -16, 99, 20, -100, -22, -59, -108, 63, -42, 35, -57, 22, 78, -106, -53, -12, 54, 105, 86, -128, -36, -56, -111, -11, 123, 24, -125, -72, 118, -112, 26, 57,
    -30, 17, -85, -58, 53, 43, -24, 104, 15, -31, 93, 30, -95, 83, 123, -34, -117, -65, 92, 122, -79, -4, -59, 62, -72, 18, -115, -12, -89, 94, -49, 30,
    70, -40, -124, 91, 58, -76, 14, 112, -25, -102, 92, -118, -31, 41, 111, 17, -85, -60, -101, -5, 78, 17, 70, -32, 4, -63, 66, -21, 36, -38, 99, -98,
    73, -116, 35, 81, 119, -71, -89, 64, -103, -7, 110, -114, -51, -23, 99, 12, 64, -9, -51, 56, 10, 74, 116, -111, 100, -47, 109, 82, -28, 49, -70, -103,
    120, -86, -63, 34, -34, 103, 47, -89, 83, -69, 59, 122, -4, -73, 5, -112, 69, -25, 100, 29, -91, 116, 37, -119, 83, 47, -48, 93, -103, -82, 3, -52,
    -5, 111, -21, -43, -111, 21, -3, 89, -44, 40, -84, 2, 53, 23, -78, -103, 43, 111, -94, -20, -123, -40, -88, -15, 46, -98, 33, -58, 122, -126, 37, 2,
    -26, 51, 83, -12, 6, -116, -52, 27, -13, 6, 44, -46, -93, 74, 90, -38, 124, 45, -75, -47, 56, -68, -22, 107, -78, -99, 113, 12, 59, 80, 126, 45,
    -76, 92, -93, 8, 100, -33, 31, -121, 120, -64, 74, -36, 114, -127, 70, -42, 81, -72, 19, 87, 38, 107, 26, 4, -34, 68, -81, -2, 13, -38, 90, 105,
    -56, 17, -98, 109, -81, 78, 124, -36, -122, 98, -81, -22, 23, -125, -56, 31, -15, -121, 11, -10, 87, -104, 7, -54, 31, -4, -30, -118, -13, -61, 21, -128,
    63, 25, -65, 56, -101, 69, -56, -78, 55, -16, 17, -99, 87, -56, -3, -18, 32, -118, -32, 67, -57, -74, -103, 79, -65, 93, -20, -117, 63, -94, 73, -79,
    -8, -121, 68, -45, 38, -107, -5, 53, -61, 70, -109, 104, 63, 113, 52, -90, -65, 82, 65, 110, -116, -39, 101, 67, -90, 91, 54, -73, 33, -92, -24, -39,
    116, -12, -49, 40, 123, -19, 82, 107, 6, -109, 99, 34, -72, 45, 120, -88, 102, 3, 123, -109, -6, 97, 54, 125, 20, -108, 112, 52, -68, 21, -18, -111,
    56, 27, 115, -28, -69, 64, 19, -96, 109, 34, 11, -8, -72, -32, -1, 96, 20, -102, -30, -83, 39, 22, 50, -13, -126, 16, -42, 120, 68, 103, 85, -104,
    49, -113, 76, -80, -124, -4, -94, 44, -29, -48, -87, 65, -26, 10, -110, 59, -63, -47, 50, -84, 15, -44, -26, -126, -52, 1, 39, -44, 103, 84, -52, 126,
    -39, 88, -90, 9, 100, -18, 91, -73, -26, -41, 86, -53, -99, 38, -113, -44, 118, 54, -52, 1, 126, -62, -75, -29, 117, 75, -58, -114, 0, 42, -53, 11,
    97, -29, 2, 90, 18, -39, -71, 25, -116, 80, 125, -8, -119, -45, 91, 21, -99, 95, -23, 29, 84, -97, 42, -9, -78, 73, -91, -29, -101, -5, 32, 44,
    -73, 1, -59, -115, 48, -50, -128, 4, 119, -87, -120, 49, 127, 16, 77, -13, -77, 33, 90, -19, -107, 79, 97, -102, 38, -81, -19, 25, -100, -83, -14, -70,
    30, -87, 109, -63, 36, 67, 115, 97, 58, 14, -61, 27, 105, 74, -78, -14, 38, 72, -122, -70, 62, 106, 10, 115, 57, 89, 29, 117, 10, -125, -85, 97,
    -105, -21, 76, 31, 123, -83, 80, 42, 61, 24, 74, -19, 93, -85, -60, 107, -127, 8, -92, 71, -119, 12, -6, -46, 59, 6, 110, 94, -30, 77, 122, -123,
    67, -101, 55, -47, -110, -22, -100, -54, -13, -81, -36, -103, 51, 1, -59, 118, -37, 8, 112, -55, -16, -112, -87, -63, -38, -119, -19, -71, -56, 57, 72, -35,
    16, 63, 102, -98, -32, 21, -11, -109, -60, -3, -104, -67, 5, 65, -25, 43, 60, -66, -41, 108, 47, -56, 29, -93, 84, -121, -68, 50, -48, 57, 19, -39,
    85, -21, -7, 127, 10, 93, 50, 3, -127, 110, 41, 89, -90, -29, -125, 60, -105, -83, -5, 89, 36, -34, 78, 26, 97, -103, 16, 46, 81, 107, -15, -63,
    119, -121, -46, -6, 57, -65, 97, -42, 105, -29, 116, -46, 32, -118, -36, -108, -5, 95, 20, -30, -85, 66, 119, 101, -36, -12, 35, -91, -108, -7, 107, -60,
    8, -80, 28, -121, 74, -88, -74, -33, 78, 63, -66, -18, 121, 34, 79, 13, 98, 47, -43, -118, 127, 0, 51, -51, -11, 66, 123, -82, -41, 0, -112, 24,
    -87, 51, 7, -78, 112, -113, 70, -93, 33, -80, 85, 48, -94, 103, 119, 24, 81, -100, 122, 37, -10, -70, -23, -114, 22, -59, 125, 80, 14, -75, -117, 40,
    118, -53, 97, -67, 43, -44, 22, 121, 32, -95, 8, -113, 19, -74, -48, -16, -67, 28, 68, -91, 17, -76, -101, 103, -69, 5, -28, -115, 30, -97, 94, 41,
    -27, 88, -58, 37, 84, 15, -24, 46, 7, 68, -116, 15, -8, -75, 71, -58, -20, -79, -51, -122, 87, -105, 10, 49, -77, 67, 1, -24, 101, 64, -32, -94,
    48, 71, -105, -28, 107, -15, 83, -110, -6, -53, 104, -40, 70, 101, -116, 116, -96, -28, 106, -59, 82, -23, 62, -127, 40, -93, 90, 51, 112, -52, 67, -72,
    -8, 106, -102, -17, -120, -49, -73, 125, -105, -16, -54, 97, 56, -41, 6, -89, 52, 13, 69, 0, 57, 99, -45, 78, 112, -98, -125, -45, 27, -64, 88, 0,
    -128, -40, 13, 62, -2, -118, -62, 57, -82, -24, 86, 52, -7, -86, 42, 0, 85, 56, -109, -13, 44, 117, -38, 12, 111, -47, 74, -6, -76, -31, 8, 126,
    -127, -43, 77, 26, 116, 52, -3, 82, -36, 28, 114, -68, -25, -126, 88, 40, 100, -115, 114, -36, -64, 33, -89, -5, -30, 39, 94, -83, 51, -112, 110, -15,
    82, 24, -83, 114, -98, 33, 95, 12, 111, 42, -123, -98, -60, -27, 63, 17, -53, -78, 24, 6, -120, -67, 88, -83, 26, -19, -61, -122, 20, 80, -107, 56,
    21, -90, 61, -31, -82, -97, 102, -62, -123, -84, 44, -97, 22, 125, -105, -49, -29, -73, 26, -95, -17, 127, 18, -112, -55, 59, -14, 120, 9, -54, 34, -88,
    125, -8, -58, 89, 53, -48, -90, -37, 67, -70, 21, 126, 33, 93, -106, -38, -126, 123, 96, -47, 72, 32, -98, -9, 56, -106, 122, 39, 104, -87, -16, -60,
    45, 0, -68, 95, 11, -14, 35, 73, 60, 4, 88, -10, 76, 62, -1, 33, 109, -11, 91, 47, -127, 71, -75, 103, 82, -68, 22, -37, -104, 75, -23, -71,
    51, -108, 40, -33, -72, 4, 123, -19, -108, -1, -47, 75, 6, -75, 113, 78, -8, 50, -33, -87, 110, -1, -55, 100, 70, -35, -73, 1, 61, -46, 92, 110,
    -35, -110, 119, 69, -54, -106, -42, 17, -26, 109, -50, -115, -37, -81, -64, -93, 74, -108, -58, 62, 9, -48, -26, 36, 3, -120, -92, 90, -4, 106, 61, -43,
    7, 101, -117, -20, 79, 21, -126, 38, 81, 103, -93, -35, -120, -17, 23, -91, -64, 33, -103, -18, 59, -112, -26, 46, -116, 11, 87, -95, -26, -114, 28, -79,
    78, 36, -21, -122, 48, 113, 83, -112, -91, -74, 31, 100, 13, 114, -18, 54, 20, 4, -39, -86, 115, 95, -99, 54, 113, -21, 68, 46, -76, -123, 19, -98,
    -62, 71, 29, 119, -102, 62, 98, -77, -57, 50, -12, 115, 60, -56, 47, 105, 9, 69, 91, -71, 17, 81, 126, -80, -43, 109, 25, -57, 48, 71, 11, -11,
    -96, -49, 8, -74, 23, -7, -67, 55, 120, -16, 49, -59, -108, 38, 85, -48, -123, 122, 80, 24, -69, -4, -111, -38, -83, 27, -46, 121, -59, 39, -31, 94,
    -14, -77, -1, -42, -87, -53, -7, -29, 26, -118, 13, -83, 36, 96, -113, -44, -26, -118, 120, -50, 40, -92, 7, -63, 36, 77, -123, -14, 116, -67, 100, -125,
    124, 52, 85, 107, -89, -35, 94, 3, -46, 75, -128, -4, 69, -27, -100, 98, -76, -30, 43, -114, -19, 38, 86, 15, -62, 96, -116, 11, -8, 86, -85, 115,
    -47, -125, 55, 104, 14, 45, 112, -96, 92, 67, -66, 83, -24, -99, 72, -2, -81, 25, 51, -13, -128, -37, 95, -20, -100, -6, -85, 94, -33, -102, 40, -41,
    -1, -62, -29, -103, 73, 31, -120, 40, -99, 22, 90, -85, 124, -70, 26, 2, 61, -12, -94, 106, 58, -55, 72, 124, -11, 60, -96, 74, -24, -104, 28, 65,
    44, -94, 88, -30, -71, 76, -114, 5, -39, 121, -107, 1, -41, 19, -72, 109, 85, -97, -62, 3, 101, 63, 21, 50, 118, 66, -48, 55, 4, -75, 22, 66,
    90, -85, 17, 60, -15, -51, 127, -80, -22, 103, -34, 11, 58, -42, 47, -113, 112, -63, 92, -44, 12, -78, -92, -124, -33, 35, -69, 110, 52, -53, -114, 3,
    -22, 113, 24, -106, -13, 32, -61, 59, -17, 42, -51, 101, 55, 118, -10, 34, 61, -33, 113, 78, -76, -105, -54, -117, -73, 10, 28, -111, 121, 81, -53, -20,
    -107, 112, 43, -118, 103, -64, 13, 66, 48, -71, -55, -103, -10, 107, -92, -55, 15, 71, 31, -118, -24, 114, 2, 49, 104, -106, 5, -40, 93, -75, 126, 81,
];
