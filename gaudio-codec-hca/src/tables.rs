//! Precomputed constant tables for HCA decoding: the ATH base curve, scalefactor-to-
//! resolution mapping, dequantizer and quantizer step tables, the two quantized-spectrum
//! lookup tables, the HFR scale-conversion table, the intensity stereo ratio table, the
//! seven-stage IMDCT twiddle tables, and the 128-point IMDCT window.


pub(crate) const ATH_BASE_CURVE: [u8; 656] = [
    0x78, 0x5F, 0x56, 0x51, 0x4E, 0x4C, 0x4B, 0x49, 0x48, 0x48, 0x47, 0x46, 0x46, 0x45, 0x45, 0x45,
    0x44, 0x44, 0x44, 0x44, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42,
    0x42, 0x42, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x40, 0x40, 0x40, 0x40,
    0x40, 0x40, 0x40, 0x40, 0x40, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F,
    0x3F, 0x3F, 0x3F, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3D, 0x3D, 0x3D, 0x3D, 0x3D, 0x3D, 0x3D,
    0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B,
    0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B,
    0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3B, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C,
    0x3D, 0x3D, 0x3D, 0x3D, 0x3D, 0x3D, 0x3D, 0x3D, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3F,
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F,
    0x3F, 0x3F, 0x3F, 0x3F, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
    0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42,
    0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x43, 0x43, 0x43,
    0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x44, 0x44,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x45, 0x45, 0x45, 0x45,
    0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x46, 0x46, 0x46, 0x46, 0x46, 0x46, 0x46, 0x46,
    0x46, 0x46, 0x47, 0x47, 0x47, 0x47, 0x47, 0x47, 0x47, 0x47, 0x47, 0x47, 0x48, 0x48, 0x48, 0x48,
    0x48, 0x48, 0x48, 0x48, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x4A, 0x4A, 0x4A, 0x4A,
    0x4A, 0x4A, 0x4A, 0x4A, 0x4B, 0x4B, 0x4B, 0x4B, 0x4B, 0x4B, 0x4B, 0x4C, 0x4C, 0x4C, 0x4C, 0x4C,
    0x4C, 0x4D, 0x4D, 0x4D, 0x4D, 0x4D, 0x4D, 0x4E, 0x4E, 0x4E, 0x4E, 0x4E, 0x4E, 0x4F, 0x4F, 0x4F,
    0x4F, 0x4F, 0x4F, 0x50, 0x50, 0x50, 0x50, 0x50, 0x51, 0x51, 0x51, 0x51, 0x51, 0x52, 0x52, 0x52,
    0x52, 0x52, 0x53, 0x53, 0x53, 0x53, 0x54, 0x54, 0x54, 0x54, 0x54, 0x55, 0x55, 0x55, 0x55, 0x56,
    0x56, 0x56, 0x56, 0x57, 0x57, 0x57, 0x57, 0x57, 0x58, 0x58, 0x58, 0x59, 0x59, 0x59, 0x59, 0x5A,
    0x5A, 0x5A, 0x5A, 0x5B, 0x5B, 0x5B, 0x5B, 0x5C, 0x5C, 0x5C, 0x5D, 0x5D, 0x5D, 0x5D, 0x5E, 0x5E,
    0x5E, 0x5F, 0x5F, 0x5F, 0x60, 0x60, 0x60, 0x61, 0x61, 0x61, 0x61, 0x62, 0x62, 0x62, 0x63, 0x63,
    0x63, 0x64, 0x64, 0x64, 0x65, 0x65, 0x66, 0x66, 0x66, 0x67, 0x67, 0x67, 0x68, 0x68, 0x68, 0x69,
    0x69, 0x6A, 0x6A, 0x6A, 0x6B, 0x6B, 0x6B, 0x6C, 0x6C, 0x6D, 0x6D, 0x6D, 0x6E, 0x6E, 0x6F, 0x6F,
    0x70, 0x70, 0x70, 0x71, 0x71, 0x72, 0x72, 0x73, 0x73, 0x73, 0x74, 0x74, 0x75, 0x75, 0x76, 0x76,
    0x77, 0x77, 0x78, 0x78, 0x78, 0x79, 0x79, 0x7A, 0x7A, 0x7B, 0x7B, 0x7C, 0x7C, 0x7D, 0x7D, 0x7E,
    0x7E, 0x7F, 0x7F, 0x80, 0x80, 0x81, 0x81, 0x82, 0x83, 0x83, 0x84, 0x84, 0x85, 0x85, 0x86, 0x86,
    0x87, 0x88, 0x88, 0x89, 0x89, 0x8A, 0x8A, 0x8B, 0x8C, 0x8C, 0x8D, 0x8D, 0x8E, 0x8F, 0x8F, 0x90,
    0x90, 0x91, 0x92, 0x92, 0x93, 0x94, 0x94, 0x95, 0x95, 0x96, 0x97, 0x97, 0x98, 0x99, 0x99, 0x9A,
    0x9B, 0x9B, 0x9C, 0x9D, 0x9D, 0x9E, 0x9F, 0xA0, 0xA0, 0xA1, 0xA2, 0xA2, 0xA3, 0xA4, 0xA5, 0xA5,
    0xA6, 0xA7, 0xA7, 0xA8, 0xA9, 0xAA, 0xAA, 0xAB, 0xAC, 0xAD, 0xAE, 0xAE, 0xAF, 0xB0, 0xB1, 0xB1,
    0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xBA, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF,
    0xC0, 0xC1, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD,
    0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xDB, 0xDC, 0xDD,
    0xDE, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0xED, 0xEE,
    0xEF, 0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0xFD, 0xFF, 0xFF,
];

pub(crate) const SCALE_TO_RESOLUTION_CURVE: [u8; 64] = [
    0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0D, 0x0D, 0x0D, 0x0D, 0x0D, 0x0D, 0x0C, 0x0C, 0x0C, 0x0C,
    0x0C, 0x0C, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x09,
    0x09, 0x09, 0x09, 0x09, 0x09, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x07, 0x06, 0x06, 0x05, 0x04,
    0x04, 0x04, 0x03, 0x03, 0x03, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub(crate) const DEQUANTIZER_SCALING_TABLE: [f32; 64] = [
    1.5883833270891046e-07f32, 2.1164136398965638e-07f32, 2.8199784196658584e-07f32, 3.757431272788381e-07f32, 5.00652333812468e-07f32, 6.670854872936616e-07f32, 8.888464435585774e-07f32, 1.1843278571177507e-06f32,
    1.5780370858919923e-06f32, 2.1026278318458935e-06f32, 2.8016097530780826e-06f32, 3.7329562019294826e-06f32, 4.973912382411072e-06f32, 6.627402854064712e-06f32, 8.830566912365612e-06f32, 1.1766134775825776e-05f32,
    1.5677580449846573e-05f32, 2.0889319785055704e-05f32, 2.783360832836479e-05f32, 3.708640724653378e-05f32, 4.941513543599285e-05f32, 6.584233051398769e-05f32, 8.773047011345625e-05f32, 0.00011689493112498894f32,
    0.00015575460565742105f32, 0.0002075325173791498f32, 0.0002765230892691761f32, 0.0003684483526740223f32, 0.0004909325507469475f32, 0.0006541345501318574f32, 0.0008715901640243828f32, 0.0011613350361585617f32,
    0.0015474006067961454f32, 0.002061807084828615f32, 0.0027472188230603933f32, 0.0036604837514460087f32, 0.004877347499132156f32, 0.006498736795037985f32, 0.008659128099679947f32, 0.01153770461678505f32,
    0.015373212285339832f32, 0.020483769476413727f32, 0.027293240651488304f32, 0.036366403102874756f32, 0.04845577850937843f32, 0.0645640566945076f32, 0.08602724969387054f32, 0.11462550610303879f32,
    0.15273074805736542f32, 0.20350342988967896f32, 0.27115458250045776f32, 0.3612951934337616f32, 0.4814014732837677f32, 0.6414350271224976f32, 0.8546688556671143f32, 1.1387885808944702f32,
    1.5173590183258057f32, 2.0217785835266113f32, 2.6938836574554443f32, 3.5894181728363037f32, 4.782657623291016f32, 6.372568607330322f32, 8.49101734161377f32, 11.313708305358887f32,
];

pub(crate) const QUANTIZER_STEP_SIZE: [f32; 16] = [
    0.0f32, 0.6666666865348816f32, 0.4000000059604645f32, 0.2857142984867096f32, 0.2222222238779068f32, 0.1818181872367859f32, 0.1538461595773697f32, 0.13333334028720856f32,
    0.06451612710952759f32, 0.0317460335791111f32, 0.015748031437397003f32, 0.007843137718737125f32, 0.003913894295692444f32, 0.0019550342112779617f32, 0.0009770395699888468f32, 0.0004884005174972117f32,
];

pub(crate) const QUANTIZED_SPECTRUM_MAX_BITS: [u8; 16] = [
    0x00, 0x02, 0x03, 0x03, 0x04, 0x04, 0x04, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C,
];

pub(crate) const QUANTIZED_SPECTRUM_BITS: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x01, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x03, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x02, 0x02, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x04, 0x04,
    0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04,
    0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04,
    0x03, 0x03, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04,
];

pub(crate) const QUANTIZED_SPECTRUM_VALUE: [f32; 128] = [
    0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32,
    0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32,
    0.0f32, 0.0f32, 1.0f32, -1.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32,
    0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32,
    0.0f32, 0.0f32, 1.0f32, 1.0f32, -1.0f32, -1.0f32, 2.0f32, -2.0f32,
    0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32,
    0.0f32, 0.0f32, 1.0f32, -1.0f32, 2.0f32, -2.0f32, 3.0f32, -3.0f32,
    0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32,
    0.0f32, 0.0f32, 1.0f32, 1.0f32, -1.0f32, -1.0f32, 2.0f32, 2.0f32,
    -2.0f32, -2.0f32, 3.0f32, 3.0f32, -3.0f32, -3.0f32, 4.0f32, -4.0f32,
    0.0f32, 0.0f32, 1.0f32, 1.0f32, -1.0f32, -1.0f32, 2.0f32, 2.0f32,
    -2.0f32, -2.0f32, 3.0f32, -3.0f32, 4.0f32, -4.0f32, 5.0f32, -5.0f32,
    0.0f32, 0.0f32, 1.0f32, 1.0f32, -1.0f32, -1.0f32, 2.0f32, -2.0f32,
    3.0f32, -3.0f32, 4.0f32, -4.0f32, 5.0f32, -5.0f32, 6.0f32, -6.0f32,
    0.0f32, 0.0f32, 1.0f32, -1.0f32, 2.0f32, -2.0f32, 3.0f32, -3.0f32,
    4.0f32, -4.0f32, 5.0f32, -5.0f32, 6.0f32, -6.0f32, 7.0f32, -7.0f32,
];

pub(crate) const SCALE_CONVERSION_TABLE: [f32; 128] = [
    0.0f32, 0.0f32, 1.870663091096958e-08f32, 2.492532402698089e-08f32, 3.321131458733362e-08f32, 4.425183419698442e-08f32, 5.896258414850308e-08f32, 7.856366579517271e-08f32,
    1.046807867055577e-07f32, 1.3948009325304156e-07f32, 1.8584781003028183e-07f32, 2.476296572240244e-07f32, 3.299498416708957e-07f32, 4.396358974645409e-07f32, 5.857851874679909e-07f32, 7.805192012710904e-07f32,
    1.0399892289569834e-06f32, 1.3857154499419266e-06f32, 1.846372356339998e-06f32, 2.460166797391139e-06f32, 3.2780062610981986e-06f32, 4.3677218855009414e-06f32, 5.819695161335403e-06f32, 7.754350917821284e-06f32,
    1.033214994095033e-05f32, 1.3766893061983865e-05f32, 1.8343456758884713e-05f32, 2.4441418645437807e-05f32, 3.256654235883616e-05f32, 4.3392719817347825e-05f32, 5.7817869674181566e-05f32, 7.703841401962563e-05f32,
    0.00010264848970109597f32, 0.00013677218521479517f32, 0.00018223971710540354f32, 0.00024282211961690336f32, 0.0003235441108699888f32, 0.0004311006923671812f32, 0.0005744125810451806f32, 0.0007653660140931606f32,
    0.0010197985684499145f32, 0.0013588129077106714f32, 0.0018105264753103256f32, 0.0024124043993651867f32, 0.0032143662683665752f32, 0.004282926209270954f32, 0.005706710275262594f32, 0.00760380644351244f32,
    0.01013155933469534f32, 0.01349961943924427f32, 0.017987331375479698f32, 0.02396690659224987f32, 0.031934287399053574f32, 0.042550280690193176f32, 0.05669537931680679f32, 0.07554277032613754f32,
    0.10065564513206482f32, 0.13411685824394226f32, 0.17870166897773743f32, 0.23810791969299316f32, 0.3172627389431f32, 0.4227311909198761f32, 0.5632607936859131f32, 0.7505070567131042f32,
    1.0f32, 1.332432508468628f32, 1.7753764390945435f32, 2.3655693531036377f32, 3.1519618034362793f32, 4.1997761726379395f32, 5.595918655395508f32, 7.456184387207031f32,
    9.93486213684082f32, 13.237534523010254f32, 17.638120651245117f32, 23.501605987548828f32, 31.314306259155273f32, 41.72420120239258f32, 55.59468460083008f32, 74.07616424560547f32,
    98.70149230957031f32, 131.51307678222656f32, 175.23231506347656f32, 233.4852294921875f32, 311.10333251953125f32, 414.5242004394531f32, 552.3255004882812f32, 735.9365234375f32,
    980.5857543945312f32, 1306.5643310546875f32, 1740.908935546875f32, 2319.643798828125f32, 3090.768798828125f32, 4118.24072265625f32, 5487.2783203125f32, 7311.42822265625f32,
    9741.984375f32, 12980.537109375f32, 17295.69140625f32, 23045.341796875f32, 30706.36328125f32, 40914.15625f32, 54515.35546875f32, 72638.03125f32,
    96785.28125f32, 128959.8515625f32, 171830.3125f32, 228952.296875f32, 305063.5f32, 406476.53125f32, 541602.5625f32, 721648.875f32,
    961548.4375f32, 1281198.375f32, 1707110.5f32, 2274609.5f32, 3030763.75f32, 4038288.25f32, 5380747.0f32, 7169482.0f32,
    9552851.0f32, 12728530.0f32, 16959908.0f32, 22597934.0f32, 30110222.0f32, 40119840.0f32, 53456980.0f32, 0.0f32,
];

pub(crate) const INTENSITY_RATIO_TABLE: [f32; 80] = [
    2.0f32, 1.8571428060531616f32, 1.7142857313156128f32, 1.5714285373687744f32, 1.4285714626312256f32, 1.2857142686843872f32, 1.1428571939468384f32, 1.0f32,
    0.8571428656578064f32, 0.7142857313156128f32, 0.5714285969734192f32, 0.4285714328289032f32, 0.2857142984867096f32, 0.1428571492433548f32, 0.0f32, 0.0f32,
    0.0f32, 1.870663091096958e-08f32, 2.492532402698089e-08f32, 3.321131458733362e-08f32, 4.425183419698442e-08f32, 5.896258414850308e-08f32, 7.856366579517271e-08f32, 1.046807867055577e-07f32,
    1.3948009325304156e-07f32, 1.8584781003028183e-07f32, 2.476296572240244e-07f32, 3.299498416708957e-07f32, 4.396358974645409e-07f32, 5.857851874679909e-07f32, 7.805192012710904e-07f32, 1.0399892289569834e-06f32,
    1.3857154499419266e-06f32, 1.846372356339998e-06f32, 2.460166797391139e-06f32, 3.2780062610981986e-06f32, 4.3677218855009414e-06f32, 5.819695161335403e-06f32, 7.754350917821284e-06f32, 1.033214994095033e-05f32,
    1.3766893061983865e-05f32, 1.8343456758884713e-05f32, 2.4441418645437807e-05f32, 3.256654235883616e-05f32, 4.3392719817347825e-05f32, 5.7817869674181566e-05f32, 7.703841401962563e-05f32, 0.00010264848970109597f32,
    0.00013677218521479517f32, 0.00018223971710540354f32, 0.00024282211961690336f32, 0.0003235441108699888f32, 0.0004311006923671812f32, 0.0005744125810451806f32, 0.0007653660140931606f32, 0.0010197985684499145f32,
    0.0013588129077106714f32, 0.0018105264753103256f32, 0.0024124043993651867f32, 0.0032143662683665752f32, 0.004282926209270954f32, 0.005706710275262594f32, 0.00760380644351244f32, 0.01013155933469534f32,
    0.01349961943924427f32, 0.017987331375479698f32, 0.02396690659224987f32, 0.031934287399053574f32, 0.042550280690193176f32, 0.05669537931680679f32, 0.07554277032613754f32, 0.10065564513206482f32,
    0.13411685824394226f32, 0.17870166897773743f32, 0.23810791969299316f32, 0.3172627389431f32, 0.4227311909198761f32, 0.5632607936859131f32, 0.7505070567131042f32, 0.0f32,
];

pub(crate) const DCT_SIN_TABLES: [[f32; 64]; 7] = [
    [
        0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32,
        0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32,
        0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32,
        0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32,
        0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32,
        0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32,
        0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32,
        0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32, 0.0816601887345314f32,
    ],
    [
        0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32,
        0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32,
        0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32,
        0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32,
        0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32,
        0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32,
        0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32,
        0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32, 0.9807852506637573f32, 0.8314695954322815f32,
    ],
    [
        0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32, 0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32,
        0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32, 0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32,
        0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32, 0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32,
        0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32, 0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32,
        0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32, 0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32,
        0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32, 0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32,
        0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32, 0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32,
        0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32, 0.9951847195625305f32, 0.9569403529167175f32, 0.8819212913513184f32, 0.7730104327201843f32,
    ],
    [
        0.9987954497337341f32, 0.9891765117645264f32, 0.9700312614440918f32, 0.9415440559387207f32, 0.903989315032959f32, 0.8577286005020142f32, 0.803207516670227f32, 0.7409511208534241f32,
        0.9987954497337341f32, 0.9891765117645264f32, 0.9700312614440918f32, 0.9415440559387207f32, 0.903989315032959f32, 0.8577286005020142f32, 0.803207516670227f32, 0.7409511208534241f32,
        0.9987954497337341f32, 0.9891765117645264f32, 0.9700312614440918f32, 0.9415440559387207f32, 0.903989315032959f32, 0.8577286005020142f32, 0.803207516670227f32, 0.7409511208534241f32,
        0.9987954497337341f32, 0.9891765117645264f32, 0.9700312614440918f32, 0.9415440559387207f32, 0.903989315032959f32, 0.8577286005020142f32, 0.803207516670227f32, 0.7409511208534241f32,
        0.9987954497337341f32, 0.9891765117645264f32, 0.9700312614440918f32, 0.9415440559387207f32, 0.903989315032959f32, 0.8577286005020142f32, 0.803207516670227f32, 0.7409511208534241f32,
        0.9987954497337341f32, 0.9891765117645264f32, 0.9700312614440918f32, 0.9415440559387207f32, 0.903989315032959f32, 0.8577286005020142f32, 0.803207516670227f32, 0.7409511208534241f32,
        0.9987954497337341f32, 0.9891765117645264f32, 0.9700312614440918f32, 0.9415440559387207f32, 0.903989315032959f32, 0.8577286005020142f32, 0.803207516670227f32, 0.7409511208534241f32,
        0.9987954497337341f32, 0.9891765117645264f32, 0.9700312614440918f32, 0.9415440559387207f32, 0.903989315032959f32, 0.8577286005020142f32, 0.803207516670227f32, 0.7409511208534241f32,
    ],
    [
        0.99969881772995f32, 0.9972904324531555f32, 0.9924795627593994f32, 0.9852776527404785f32, 0.9757021069526672f32, 0.9637760519981384f32, 0.949528157711029f32, 0.9329928159713745f32,
        0.91420978307724f32, 0.89322429895401f32, 0.8700869679450989f32, 0.8448535799980164f32, 0.8175848126411438f32, 0.7883464097976685f32, 0.7572088241577148f32, 0.7242470979690552f32,
        0.99969881772995f32, 0.9972904324531555f32, 0.9924795627593994f32, 0.9852776527404785f32, 0.9757021069526672f32, 0.9637760519981384f32, 0.949528157711029f32, 0.9329928159713745f32,
        0.91420978307724f32, 0.89322429895401f32, 0.8700869679450989f32, 0.8448535799980164f32, 0.8175848126411438f32, 0.7883464097976685f32, 0.7572088241577148f32, 0.7242470979690552f32,
        0.99969881772995f32, 0.9972904324531555f32, 0.9924795627593994f32, 0.9852776527404785f32, 0.9757021069526672f32, 0.9637760519981384f32, 0.949528157711029f32, 0.9329928159713745f32,
        0.91420978307724f32, 0.89322429895401f32, 0.8700869679450989f32, 0.8448535799980164f32, 0.8175848126411438f32, 0.7883464097976685f32, 0.7572088241577148f32, 0.7242470979690552f32,
        0.99969881772995f32, 0.9972904324531555f32, 0.9924795627593994f32, 0.9852776527404785f32, 0.9757021069526672f32, 0.9637760519981384f32, 0.949528157711029f32, 0.9329928159713745f32,
        0.91420978307724f32, 0.89322429895401f32, 0.8700869679450989f32, 0.8448535799980164f32, 0.8175848126411438f32, 0.7883464097976685f32, 0.7572088241577148f32, 0.7242470979690552f32,
    ],
    [
        0.9999247193336487f32, 0.9993223547935486f32, 0.9981181025505066f32, 0.9963126182556152f32, 0.9939069747924805f32, 0.9909026622772217f32, 0.9873014092445374f32, 0.983105480670929f32,
        0.978317379951477f32, 0.9729399681091309f32, 0.9669764637947083f32, 0.9604305028915405f32, 0.9533060193061829f32, 0.9456073045730591f32, 0.9373390078544617f32, 0.928506076335907f32,
        0.9191138744354248f32, 0.909168004989624f32, 0.898674488067627f32, 0.8876396417617798f32, 0.8760700821876526f32, 0.8639728426933289f32, 0.8513551950454712f32, 0.8382247090339661f32,
        0.8245893120765686f32, 0.810457170009613f32, 0.7958369255065918f32, 0.7807372212409973f32, 0.765167236328125f32, 0.7491363883018494f32, 0.7326542735099792f32, 0.7157308459281921f32,
        0.9999247193336487f32, 0.9993223547935486f32, 0.9981181025505066f32, 0.9963126182556152f32, 0.9939069747924805f32, 0.9909026622772217f32, 0.9873014092445374f32, 0.983105480670929f32,
        0.978317379951477f32, 0.9729399681091309f32, 0.9669764637947083f32, 0.9604305028915405f32, 0.9533060193061829f32, 0.9456073045730591f32, 0.9373390078544617f32, 0.928506076335907f32,
        0.9191138744354248f32, 0.909168004989624f32, 0.898674488067627f32, 0.8876396417617798f32, 0.8760700821876526f32, 0.8639728426933289f32, 0.8513551950454712f32, 0.8382247090339661f32,
        0.8245893120765686f32, 0.810457170009613f32, 0.7958369255065918f32, 0.7807372212409973f32, 0.765167236328125f32, 0.7491363883018494f32, 0.7326542735099792f32, 0.7157308459281921f32,
    ],
    [
        0.999981164932251f32, 0.9998306035995483f32, 0.9995294213294983f32, 0.9990777373313904f32, 0.9984755516052246f32, 0.9977230429649353f32, 0.9968202710151672f32, 0.9957674145698547f32,
        0.9945645928382874f32, 0.9932119250297546f32, 0.9917097687721252f32, 0.990058183670044f32, 0.9882575869560242f32, 0.9863080978393555f32, 0.9842100739479065f32, 0.9819638729095459f32,
        0.9795697927474976f32, 0.9770281314849854f32, 0.9743393659591675f32, 0.9715039134025574f32, 0.9685220718383789f32, 0.9653944373130798f32, 0.9621214270591736f32, 0.9587034583091736f32,
        0.9551411867141724f32, 0.9514350295066833f32, 0.9475855827331543f32, 0.943593442440033f32, 0.9394592046737671f32, 0.9351835250854492f32, 0.9307669401168823f32, 0.9262102246284485f32,
        0.9215140342712402f32, 0.9166790843009949f32, 0.9117060303688049f32, 0.9065957069396973f32, 0.9013488292694092f32, 0.8959662318229675f32, 0.8904487490653992f32, 0.8847970962524414f32,
        0.8790122270584106f32, 0.8730949759483337f32, 0.8670462369918823f32, 0.8608669638633728f32, 0.854557991027832f32, 0.8481203317642212f32, 0.8415549993515015f32, 0.8348628878593445f32,
        0.8280450701713562f32, 0.821102499961853f32, 0.8140363097190857f32, 0.8068475723266602f32, 0.7995372414588928f32, 0.792106568813324f32, 0.7845565676689148f32, 0.7768884897232056f32,
        0.7691033482551575f32, 0.7612023949623108f32, 0.753186821937561f32, 0.7450577616691589f32, 0.7368165850639343f32, 0.7284643650054932f32, 0.7200025320053101f32, 0.7114322185516357f32,
    ],
];

pub(crate) const DCT_COS_TABLES: [[f32; 64]; 7] = [
    [
        -0.03382475674152374f32, 0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32,
        0.03382475674152374f32, -0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32,
        0.03382475674152374f32, -0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32,
        -0.03382475674152374f32, 0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32,
        0.03382475674152374f32, -0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32,
        -0.03382475674152374f32, 0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32,
        -0.03382475674152374f32, 0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32,
        0.03382475674152374f32, -0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32, 0.03382475674152374f32, 0.03382475674152374f32, -0.03382475674152374f32,
    ],
    [
        -0.19509032368659973f32, -0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32,
        0.19509032368659973f32, 0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32,
        0.19509032368659973f32, 0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32,
        -0.19509032368659973f32, -0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32,
        0.19509032368659973f32, 0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32,
        -0.19509032368659973f32, -0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32,
        -0.19509032368659973f32, -0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32,
        0.19509032368659973f32, 0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32, -0.19509032368659973f32, -0.5555702447891235f32, 0.19509032368659973f32, 0.5555702447891235f32,
    ],
    [
        -0.0980171412229538f32, -0.290284663438797f32, -0.4713967442512512f32, -0.6343932747840881f32, 0.0980171412229538f32, 0.290284663438797f32, 0.4713967442512512f32, 0.6343932747840881f32,
        0.0980171412229538f32, 0.290284663438797f32, 0.4713967442512512f32, 0.6343932747840881f32, -0.0980171412229538f32, -0.290284663438797f32, -0.4713967442512512f32, -0.6343932747840881f32,
        0.0980171412229538f32, 0.290284663438797f32, 0.4713967442512512f32, 0.6343932747840881f32, -0.0980171412229538f32, -0.290284663438797f32, -0.4713967442512512f32, -0.6343932747840881f32,
        -0.0980171412229538f32, -0.290284663438797f32, -0.4713967442512512f32, -0.6343932747840881f32, 0.0980171412229538f32, 0.290284663438797f32, 0.4713967442512512f32, 0.6343932747840881f32,
        0.0980171412229538f32, 0.290284663438797f32, 0.4713967442512512f32, 0.6343932747840881f32, -0.0980171412229538f32, -0.290284663438797f32, -0.4713967442512512f32, -0.6343932747840881f32,
        -0.0980171412229538f32, -0.290284663438797f32, -0.4713967442512512f32, -0.6343932747840881f32, 0.0980171412229538f32, 0.290284663438797f32, 0.4713967442512512f32, 0.6343932747840881f32,
        -0.0980171412229538f32, -0.290284663438797f32, -0.4713967442512512f32, -0.6343932747840881f32, 0.0980171412229538f32, 0.290284663438797f32, 0.4713967442512512f32, 0.6343932747840881f32,
        0.0980171412229538f32, 0.290284663438797f32, 0.4713967442512512f32, 0.6343932747840881f32, -0.0980171412229538f32, -0.290284663438797f32, -0.4713967442512512f32, -0.6343932747840881f32,
    ],
    [
        -0.049067676067352295f32, -0.1467304676771164f32, -0.24298018217086792f32, -0.3368898630142212f32, -0.4275550842285156f32, -0.5141027569770813f32, -0.5956993103027344f32, -0.6715589761734009f32,
        0.049067676067352295f32, 0.1467304676771164f32, 0.24298018217086792f32, 0.3368898630142212f32, 0.4275550842285156f32, 0.5141027569770813f32, 0.5956993103027344f32, 0.6715589761734009f32,
        0.049067676067352295f32, 0.1467304676771164f32, 0.24298018217086792f32, 0.3368898630142212f32, 0.4275550842285156f32, 0.5141027569770813f32, 0.5956993103027344f32, 0.6715589761734009f32,
        -0.049067676067352295f32, -0.1467304676771164f32, -0.24298018217086792f32, -0.3368898630142212f32, -0.4275550842285156f32, -0.5141027569770813f32, -0.5956993103027344f32, -0.6715589761734009f32,
        0.049067676067352295f32, 0.1467304676771164f32, 0.24298018217086792f32, 0.3368898630142212f32, 0.4275550842285156f32, 0.5141027569770813f32, 0.5956993103027344f32, 0.6715589761734009f32,
        -0.049067676067352295f32, -0.1467304676771164f32, -0.24298018217086792f32, -0.3368898630142212f32, -0.4275550842285156f32, -0.5141027569770813f32, -0.5956993103027344f32, -0.6715589761734009f32,
        -0.049067676067352295f32, -0.1467304676771164f32, -0.24298018217086792f32, -0.3368898630142212f32, -0.4275550842285156f32, -0.5141027569770813f32, -0.5956993103027344f32, -0.6715589761734009f32,
        0.049067676067352295f32, 0.1467304676771164f32, 0.24298018217086792f32, 0.3368898630142212f32, 0.4275550842285156f32, 0.5141027569770813f32, 0.5956993103027344f32, 0.6715589761734009f32,
    ],
    [
        -0.024541229009628296f32, -0.0735645666718483f32, -0.12241067737340927f32, -0.1709618866443634f32, -0.21910123527050018f32, -0.2667127549648285f32, -0.3136817514896393f32, -0.3598950505256653f32,
        -0.40524131059646606f32, -0.4496113359928131f32, -0.49289819598197937f32, -0.5349976420402527f32, -0.5758081674575806f32, -0.6152315735816956f32, -0.6531728506088257f32, -0.6895405650138855f32,
        0.024541229009628296f32, 0.0735645666718483f32, 0.12241067737340927f32, 0.1709618866443634f32, 0.21910123527050018f32, 0.2667127549648285f32, 0.3136817514896393f32, 0.3598950505256653f32,
        0.40524131059646606f32, 0.4496113359928131f32, 0.49289819598197937f32, 0.5349976420402527f32, 0.5758081674575806f32, 0.6152315735816956f32, 0.6531728506088257f32, 0.6895405650138855f32,
        0.024541229009628296f32, 0.0735645666718483f32, 0.12241067737340927f32, 0.1709618866443634f32, 0.21910123527050018f32, 0.2667127549648285f32, 0.3136817514896393f32, 0.3598950505256653f32,
        0.40524131059646606f32, 0.4496113359928131f32, 0.49289819598197937f32, 0.5349976420402527f32, 0.5758081674575806f32, 0.6152315735816956f32, 0.6531728506088257f32, 0.6895405650138855f32,
        -0.024541229009628296f32, -0.0735645666718483f32, -0.12241067737340927f32, -0.1709618866443634f32, -0.21910123527050018f32, -0.2667127549648285f32, -0.3136817514896393f32, -0.3598950505256653f32,
        -0.40524131059646606f32, -0.4496113359928131f32, -0.49289819598197937f32, -0.5349976420402527f32, -0.5758081674575806f32, -0.6152315735816956f32, -0.6531728506088257f32, -0.6895405650138855f32,
    ],
    [
        -0.012271538376808167f32, -0.03680722415447235f32, -0.06132073700428009f32, -0.08579730987548828f32, -0.11022220551967621f32, -0.13458070158958435f32, -0.15885815024375916f32, -0.18303988873958588f32,
        -0.20711137354373932f32, -0.23105810582637787f32, -0.2548656463623047f32, -0.2785196900367737f32, -0.30200594663619995f32, -0.32531028985977173f32, -0.3484186828136444f32, -0.37131720781326294f32,
        -0.39399203658103943f32, -0.4164295494556427f32, -0.43861624598503113f32, -0.46053871512413025f32, -0.4821837842464447f32, -0.5035383701324463f32, -0.5245896577835083f32, -0.545324981212616f32,
        -0.5657318234443665f32, -0.5857978463172913f32, -0.6055110692977905f32, -0.6248595118522644f32, -0.6438315510749817f32, -0.6624158024787903f32, -0.6806010007858276f32, -0.6983762383460999f32,
        0.012271538376808167f32, 0.03680722415447235f32, 0.06132073700428009f32, 0.08579730987548828f32, 0.11022220551967621f32, 0.13458070158958435f32, 0.15885815024375916f32, 0.18303988873958588f32,
        0.20711137354373932f32, 0.23105810582637787f32, 0.2548656463623047f32, 0.2785196900367737f32, 0.30200594663619995f32, 0.32531028985977173f32, 0.3484186828136444f32, 0.37131720781326294f32,
        0.39399203658103943f32, 0.4164295494556427f32, 0.43861624598503113f32, 0.46053871512413025f32, 0.4821837842464447f32, 0.5035383701324463f32, 0.5245896577835083f32, 0.545324981212616f32,
        0.5657318234443665f32, 0.5857978463172913f32, 0.6055110692977905f32, 0.6248595118522644f32, 0.6438315510749817f32, 0.6624158024787903f32, 0.6806010007858276f32, 0.6983762383460999f32,
    ],
    [
        -0.006135884672403336f32, -0.018406730145215988f32, -0.030674804002046585f32, -0.04293825849890709f32, -0.055195245891809464f32, -0.06744392216205597f32, -0.07968243956565857f32, -0.09190895408391953f32,
        -0.104121632874012f32, -0.11631862819194794f32, -0.1284981071949005f32, -0.14065824449062347f32, -0.15279719233512878f32, -0.1649131178855896f32, -0.17700421810150146f32, -0.18906866014003754f32,
        -0.20110464096069336f32, -0.2131103128194809f32, -0.22508391737937927f32, -0.23702360689640045f32, -0.24892760813236237f32, -0.26079410314559937f32, -0.27262136340141296f32, -0.28440752625465393f32,
        -0.29615089297294617f32, -0.307849645614624f32, -0.3195020258426666f32, -0.3311063051223755f32, -0.34266072511672974f32, -0.3541635274887085f32, -0.3656129837036133f32, -0.3770074248313904f32,
        -0.38834503293037415f32, -0.39962419867515564f32, -0.410843163728714f32, -0.4220002591609955f32, -0.4330938160419464f32, -0.4441221356391907f32, -0.45508357882499695f32, -0.4659765064716339f32,
        -0.47679921984672546f32, -0.48755016922950745f32, -0.49822765588760376f32, -0.5088301301002502f32, -0.5193560123443604f32, -0.5298036336898804f32, -0.5401714444160461f32, -0.5504579544067383f32,
        -0.5606615543365479f32, -0.5707807540893555f32, -0.5808139443397522f32, -0.5907596945762634f32, -0.600616455078125f32, -0.6103827953338623f32, -0.620057225227356f32, -0.6296382546424866f32,
        -0.6391244530677795f32, -0.6485143899917603f32, -0.6578066945075989f32, -0.6669999361038208f32, -0.6760926842689514f32, -0.6850836873054504f32, -0.6939714550971985f32, -0.7027547359466553f32,
    ],
];

pub(crate) const IMDCT_WINDOW: [f32; 128] = [
    0.0006905337795615196f32, 0.0019762348383665085f32, 0.0036738645285367966f32, 0.005724240094423294f32, 0.008096703328192234f32, 0.010773181915283203f32, 0.013742517679929733f32, 0.01699785701930523f32,
    0.020535264164209366f32, 0.024352902546525f32, 0.02845051884651184f32, 0.03282909467816353f32, 0.03749062120914459f32, 0.04243789613246918f32, 0.047674428671598434f32, 0.05320430174469948f32,
    0.05903211236000061f32, 0.06516288220882416f32, 0.07160200923681259f32, 0.07835522294044495f32, 0.08542849123477936f32, 0.09282802045345306f32, 0.10056015104055405f32, 0.10863135010004044f32,
    0.11704812198877335f32, 0.12581698596477509f32, 0.134944349527359f32, 0.14443650841712952f32, 0.1542995125055313f32, 0.1645391285419464f32, 0.1751607209444046f32, 0.18616916239261627f32,
    0.19756872951984406f32, 0.2093629688024521f32, 0.22155462205410004f32, 0.2341454178094864f32, 0.24713599681854248f32, 0.26052576303482056f32, 0.27431270480155945f32, 0.28849318623542786f32,
    0.30306193232536316f32, 0.31801173090934753f32, 0.3333333432674408f32, 0.3490152955055237f32, 0.3650438189506531f32, 0.3814027011394501f32, 0.39807310700416565f32, 0.4150335192680359f32,
    0.43225979804992676f32, 0.44972503185272217f32, 0.46739956736564636f32, 0.48525115847587585f32, 0.503244936466217f32, 0.5213438272476196f32, 0.5395085215568542f32, 0.5576977729797363f32,
    0.5758689045906067f32, 0.5939780473709106f32, 0.6119805574417114f32, 0.6298314332962036f32, 0.6474860310554504f32, 0.6649002432823181f32, 0.6820311546325684f32, 0.6988375782966614f32,
    -0.7152804136276245f32, -0.7313231229782104f32, -0.7469321489334106f32, -0.7620773315429688f32, -0.7767318487167358f32, -0.7908728122711182f32, -0.8044812679290771f32, -0.8175420165061951f32,
    -0.8300440907478333f32, -0.8419801592826843f32, -0.8533467054367065f32, -0.8641437888145447f32, -0.8743748068809509f32, -0.884046196937561f32, -0.8931670784950256f32, -0.9017491340637207f32,
    -0.9098061323165894f32, -0.9173536896705627f32, -0.9244089722633362f32, -0.9309903383255005f32, -0.9371170401573181f32, -0.9428090453147888f32, -0.9480867981910706f32, -0.9529708623886108f32,
    -0.9574819207191467f32, -0.9616405367851257f32, -0.9654669165611267f32, -0.9689807891845703f32, -0.9722015857696533f32, -0.9751479625701904f32, -0.9778379797935486f32, -0.9802890419960022f32,
    -0.9825177192687988f32, -0.9845398664474487f32, -0.9863705635070801f32, -0.988024115562439f32, -0.9895140528678894f32, -0.9908531904220581f32, -0.9920534491539001f32, -0.9931262731552124f32,
    -0.9940820932388306f32, -0.9949309825897217f32, -0.9956821799278259f32, -0.9963443279266357f32, -0.9969255328178406f32, -0.9974333047866821f32, -0.9978746175765991f32, -0.9982560873031616f32,
    -0.9985836744308472f32, -0.9988629221916199f32, -0.9990991353988647f32, -0.9992969632148743f32, -0.9994609951972961f32, -0.9995952248573303f32, -0.9997034072875977f32, -0.9997891187667847f32,
    -0.9998555183410645f32, -0.9999055862426758f32, -0.9999419450759888f32, -0.9999672174453735f32, -0.9999836087226868f32, -0.9999932646751404f32, -0.9999980330467224f32, -0.9999997615814209f32,
];
